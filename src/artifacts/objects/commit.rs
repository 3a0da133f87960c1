//! Git commit record
//!
//! Only the parent links of a commit matter for ordering, so decoding stops
//! once the parent lines have been read.
//!
//! ## Format
//!
//! On disk (after zlib decompression):
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::io::BufRead;

const PARENT_PREFIX: &[u8] = b"parent ";
const AUTHOR_PREFIX: &[u8] = b"author ";

/// A commit's identity and its parents, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitRecord {
    oid: ObjectId,
    parents: Vec<ObjectId>,
}

impl CommitRecord {
    /// Decode the content of a commit object (header already consumed)
    ///
    /// Header lines are scanned until the author line or the blank line that
    /// separates headers from the message, whichever comes first. The
    /// message itself is never read, so non-UTF-8 messages are fine.
    pub fn deserialize(oid: ObjectId, reader: impl BufRead) -> anyhow::Result<Self> {
        let mut parents = Vec::new();

        for line in reader.split(b'\n') {
            let line = line.context("Invalid commit object: unreadable header")?;

            if line.is_empty() || line.starts_with(AUTHOR_PREFIX) {
                break;
            }

            if let Some(parent) = line.strip_prefix(PARENT_PREFIX) {
                let parent = std::str::from_utf8(parent)
                    .context("Invalid commit object: invalid parent line")?;
                parents.push(ObjectId::try_parse(parent.trim_end().to_string())?);
            }
        }

        Ok(Self::new(oid, parents))
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";
    const P1: &str = "1111111111111111111111111111111111111111";
    const P2: &str = "2222222222222222222222222222222222222222";

    fn oid(id: &str) -> ObjectId {
        ObjectId::try_parse(id.to_string()).unwrap()
    }

    #[test]
    fn test_root_commit_has_no_parents() {
        let content = format!(
            "tree {TREE}\nauthor A <a@b.c> 0 +0000\ncommitter A <a@b.c> 0 +0000\n\ninit\n"
        );

        let record = CommitRecord::deserialize(oid(P1), Cursor::new(content)).unwrap();

        assert!(record.is_root());
        assert_eq!(record.oid(), &oid(P1));
    }

    #[test]
    fn test_merge_commit_keeps_parent_declaration_order() {
        let content = format!(
            "tree {TREE}\nparent {P2}\nparent {P1}\nauthor A <a@b.c> 0 +0000\n\nmerge\n"
        );

        let record = CommitRecord::deserialize(oid("3".repeat(40).as_str()), Cursor::new(content))
            .unwrap();

        assert_eq!(record.parents(), &[oid(P2), oid(P1)]);
    }

    #[test]
    fn test_parent_lines_in_message_are_ignored() {
        let content =
            format!("tree {TREE}\nauthor A <a@b.c> 0 +0000\n\nparent {P2}\nnot a header\n");

        let record = CommitRecord::deserialize(oid(P1), Cursor::new(content)).unwrap();

        assert!(record.parents().is_empty());
    }

    #[test]
    fn test_non_utf8_message_is_not_decoded() {
        let mut content = format!("tree {TREE}\nparent {P1}\nauthor A <a@b.c> 0 +0000\n\n")
            .into_bytes();
        content.extend_from_slice(&[0xff, 0xfe, b'\n']);

        let record = CommitRecord::deserialize(oid(P2), Cursor::new(content)).unwrap();

        assert_eq!(record.parents(), &[oid(P1)]);
    }

    #[test]
    fn test_malformed_parent_is_rejected() {
        let content = format!("tree {TREE}\nparent not-a-hash\nauthor A <a@b.c> 0 +0000\n");

        assert!(CommitRecord::deserialize(oid(P1), Cursor::new(content)).is_err());
    }
}
