//! Command implementations
//!
//! Commands are `impl Repository` blocks that compose the repository areas
//! (refs, object database) with the graph algorithms and write to the
//! repository's writer.

pub mod porcelain;
