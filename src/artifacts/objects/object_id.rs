//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings. Loose objects are stored
//! under `.git/objects/<first-2-chars>/<remaining-38-chars>`, so an ID can be
//! recovered from an object's path as well as parsed from a ref file.
//!
//! `ObjectId` orders lexicographically by its hex string. That ordering is
//! what seeds the graph traversal, so it must stay a plain string comparison.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use std::path::{Path, PathBuf};

/// Git object identifier (SHA-1 hash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Recover the object ID from a loose object path relative to `objects/`
    ///
    /// `ab/cdef...` becomes `abcdef...`. Returns `None` for anything that is
    /// not a two-level fan-out path of hex characters (e.g. `pack/...`,
    /// `info/packs`, temp files).
    pub fn from_loose_path(relative_path: &Path) -> Option<Self> {
        let mut components = relative_path.components();
        let dir = components.next()?.as_os_str().to_str()?;
        let file = components.next()?.as_os_str().to_str()?;

        if components.next().is_some() || dir.len() != 2 {
            return None;
        }

        Self::try_parse(format!("{dir}{file}")).ok()
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
