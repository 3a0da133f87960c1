//! Porcelain commands (user-facing operations)
//!
//! - `topo_order`: Print reachable commits in sticky topological order

pub mod topo_order;
