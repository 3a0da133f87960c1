//! Git data structures and algorithms
//!
//! - `branch`: Branch names and the branch-head map
//! - `graph`: Commit graph, topological sort and sticky output
//! - `objects`: Object IDs, object kinds and commit records

pub mod branch;
pub mod graph;
pub mod objects;
