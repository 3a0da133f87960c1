//! Git references (local branches)
//!
//! Branch pointers live under `.git/refs/heads`, one file per branch, with
//! nested directories for names containing `/`. A ref file holds either:
//! - A 40-character SHA-1 hash (direct reference)
//! - `ref: <path>` (symbolic reference, followed relative to `.git`)
//!
//! Only loose refs are read; `packed-refs` is not consulted.

use crate::artifacts::branch::BranchMap;
use crate::artifacts::branch::SYMREF_REGEX;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::TopoError;
use anyhow::Context;
use derive_new::new;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Symbolic refs pointing at symbolic refs are followed at most this deep
const MAX_SYMREF_DEPTH: usize = 5;

/// Git references reader
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

/// Internal representation of a reference value
#[derive(Debug, Clone)]
enum SymRefOrOid {
    /// Symbolic reference pointing to another ref
    SymRef { target: String },
    /// Direct object ID
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path, symref: &Regex) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.lines().next().unwrap_or("").trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = symref.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                target: symref_match[1].trim().to_string(),
            }))
        } else {
            let oid = ObjectId::try_parse(content.to_string()).map_err(|err| {
                TopoError::InvalidRef {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                }
            })?;
            Ok(Some(SymRefOrOid::Oid(oid)))
        }
    }
}

impl Refs {
    pub fn heads_path(&self) -> PathBuf {
        self.path.join("refs").join("heads")
    }

    /// Collect every local branch, grouped by the commit it points at
    ///
    /// Branch files are walked in file-name order and each commit's names are
    /// sorted, so the result does not depend on directory enumeration order.
    /// Symbolic refs that lead nowhere are skipped.
    pub fn branch_heads(&self) -> anyhow::Result<BranchMap> {
        let heads_path = self.heads_path();
        if !heads_path.is_dir() {
            return Err(TopoError::InvalidRepositoryStructure {
                path: self.path.to_path_buf(),
                reason: "missing refs/heads directory".to_string(),
            }
            .into());
        }

        let symref = Regex::new(SYMREF_REGEX)?;
        let mut branches = BranchMap::new();

        for entry in WalkDir::new(&heads_path).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("failed to walk branches in {:?}", heads_path))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry
                .path()
                .strip_prefix(&heads_path)
                .ok()
                .and_then(BranchName::from_relative_path)
            else {
                continue;
            };

            match self.resolve(entry.path(), &symref)? {
                Some(oid) => branches.entry(oid).or_default().push(name),
                None => {
                    tracing::debug!(branch = %name, "branch does not point at a commit, skipping")
                }
            }
        }

        for names in branches.values_mut() {
            names.sort();
        }

        tracing::debug!(
            heads = branches.len(),
            branches = branches.values().map(Vec::len).sum::<usize>(),
            "read branch heads"
        );

        Ok(branches)
    }

    /// Read a ref file, following symbolic references
    fn resolve(&self, path: &Path, symref: &Regex) -> anyhow::Result<Option<ObjectId>> {
        let mut path = path.to_path_buf();

        for _ in 0..=MAX_SYMREF_DEPTH {
            match SymRefOrOid::read_symref_or_oid(&path, symref)? {
                Some(SymRefOrOid::Oid(oid)) => return Ok(Some(oid)),
                Some(SymRefOrOid::SymRef { target }) => path = self.path.join(target),
                None => return Ok(None),
            }
        }

        Err(TopoError::InvalidRef {
            path,
            reason: format!("symbolic ref chain deeper than {MAX_SYMREF_DEPTH}"),
        }
        .into())
    }
}
