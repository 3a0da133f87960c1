//! Topological ordering of git commits
//!
//! Reads the local branches and loose commit objects of a repository, builds
//! the commit graph reachable from the branch heads, sorts it topologically
//! and renders the order descendants first in sticky groups.
//!
//! - `areas`: repository discovery, refs and the loose object database
//! - `artifacts`: object IDs, commit records, the graph and its algorithms
//! - `commands`: the `topo_order_commits` entry point on [`Repository`]
//! - `errors`: fatal error conditions
//!
//! [`Repository`]: areas::repository::Repository

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Environment variable holding the log filter (`tracing_subscriber::EnvFilter` syntax)
pub const LOG_ENV_VAR: &str = "TOPO_ORDER_LOG";
