//! Loose object database
//!
//! Reads `.git/objects/XX/YYYY...` files, inflating each one just far enough
//! to learn its kind. Commit objects are decoded into [`CommitRecord`]s;
//! blobs, trees and tags are skipped. The `pack` and `info` directories are
//! never entered.

use crate::artifacts::objects::commit::CommitRecord;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::TopoError;
use anyhow::Context;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directories under `objects/` that never hold loose objects
const SKIPPED_DIRS: [&str; 2] = ["pack", "info"];

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Decode every loose commit object, keyed by hash
    pub fn load_commits(&self) -> anyhow::Result<BTreeMap<ObjectId, CommitRecord>> {
        if !self.path.is_dir() {
            return Err(TopoError::InvalidRepositoryStructure {
                path: self.path.to_path_buf(),
                reason: "missing objects directory".to_string(),
            }
            .into());
        }

        let mut commits = BTreeMap::new();
        let mut skipped = 0usize;

        let walker = WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !(entry.depth() == 1
                    && entry.file_type().is_dir()
                    && SKIPPED_DIRS.iter().any(|dir| entry.file_name() == *dir))
            });

        for entry in walker {
            let entry =
                entry.with_context(|| format!("failed to walk objects in {:?}", self.path))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(oid) = entry
                .path()
                .strip_prefix(&self.path)
                .ok()
                .and_then(ObjectId::from_loose_path)
            else {
                continue;
            };

            match self.parse_object_as_commit(&oid)? {
                Some(commit) => {
                    commits.insert(oid, commit);
                }
                None => skipped += 1,
            }
        }

        tracing::debug!(
            commits = commits.len(),
            skipped,
            "loaded loose commit objects"
        );

        Ok(commits)
    }

    /// Decode a single loose object if it is a commit
    pub fn parse_object_as_commit(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<Option<CommitRecord>> {
        let object_path = self.path.join(object_id.to_path());
        let mut object_reader = self.open_object(&object_path)?;

        let object_type = ObjectType::parse_object_type(&mut object_reader)
            .map_err(|err| Self::corrupt(&object_path, err))?;

        match object_type {
            ObjectType::Commit => CommitRecord::deserialize(object_id.clone(), object_reader)
                .map(Some)
                .map_err(|err| Self::corrupt(&object_path, err)),
            _ => Ok(None),
        }
    }

    fn open_object(&self, object_path: &Path) -> anyhow::Result<impl BufRead> {
        let file = File::open(object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        // inflate lazily so non-commit objects are only read up to their header
        Ok(BufReader::new(flate2::read::ZlibDecoder::new(file)))
    }

    fn corrupt(object_path: &Path, err: anyhow::Error) -> anyhow::Error {
        TopoError::CorruptObject {
            path: PathBuf::from(object_path),
            reason: format!("{err:#}"),
        }
        .into()
    }
}
