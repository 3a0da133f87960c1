//! Fatal error conditions
//!
//! Every variant aborts the run. I/O plumbing wraps these with `anyhow`
//! context on the way up, but the variant stays the root cause so callers can
//! `downcast_ref::<TopoError>()` to tell the conditions apart.

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopoError {
    #[error("not inside a git repository (searched upward from {})", .start.display())]
    RepositoryNotFound { start: PathBuf },

    #[error("{} is not a valid git repository: {reason}", .path.display())]
    InvalidRepositoryStructure { path: PathBuf, reason: String },

    #[error("no branches found in {}", .heads_path.display())]
    NoBranches { heads_path: PathBuf },

    #[error("could not find any commits in {}, they may be packed or nonexistent", .objects_path.display())]
    NoCommits { objects_path: PathBuf },

    #[error("invalid ref {}: {reason}", .path.display())]
    InvalidRef { path: PathBuf, reason: String },

    #[error("corrupt object {}: {reason}", .path.display())]
    CorruptObject { path: PathBuf, reason: String },

    #[error("{}", missing_commit_message(.oid, .referenced_by.as_ref()))]
    MissingCommit {
        oid: ObjectId,
        referenced_by: Option<ObjectId>,
    },

    #[error("cycle in commit graph detected ({} commits never became ready, first {})", .oids.len(), first_oid(.oids))]
    CycleDetected { oids: Vec<ObjectId> },

    #[error("failure to generate topological sort: sorted {sorted} of {expected} commits")]
    SortIntegrity { sorted: usize, expected: usize },
}

fn missing_commit_message(oid: &ObjectId, referenced_by: Option<&ObjectId>) -> String {
    match referenced_by {
        Some(child) => format!("commit {oid} (parent of {child}) not found"),
        None => format!("commit {oid} (branch head) not found"),
    }
}

fn first_oid(oids: &[ObjectId]) -> &str {
    oids.first().map(|oid| oid.as_ref()).unwrap_or("<none>")
}
