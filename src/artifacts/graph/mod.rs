//! Commit graph construction, ordering and rendering
//!
//! - `commit_graph`: reachable subgraph built breadth-first from branch heads
//! - `topo_sort`: deterministic Kahn topological sort with cycle detection
//! - `sticky`: grouped text rendering of an ordering

pub mod commit_graph;
pub mod sticky;
pub mod topo_sort;
