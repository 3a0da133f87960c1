use assert_fs::TempDir;
use assert_fs::prelude::*;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::Path;

const EMPTY_TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";
const AUTHOR: &str = "fake_user <fake_email@email.com> 1672574400 +0000";

/// A repository written directly as loose objects and ref files
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    pub fn init(dir: TempDir) -> Self {
        dir.child(".git/refs/heads")
            .create_dir_all()
            .expect("Failed to create refs/heads");
        dir.child(".git/objects")
            .create_dir_all()
            .expect("Failed to create objects");
        dir.child(".git/HEAD")
            .write_str("ref: refs/heads/main\n")
            .expect("Failed to write HEAD");

        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git_dir(&self) -> assert_fs::fixture::ChildPath {
        self.dir.child(".git")
    }

    /// Write a commit object with the given parents, returning its hash
    pub fn commit(&self, parents: &[&str], message: &str) -> String {
        let mut content = format!("tree {EMPTY_TREE}\n");
        for parent in parents {
            content.push_str(&format!("parent {parent}\n"));
        }
        content.push_str(&format!("author {AUTHOR}\ncommitter {AUTHOR}\n\n{message}\n"));

        self.write_object("commit", content.as_bytes())
    }

    pub fn blob(&self, content: &str) -> String {
        self.write_object("blob", content.as_bytes())
    }

    /// Write a commit object under an arbitrary hash (no integrity relation)
    pub fn commit_at(&self, oid: &str, parents: &[&str]) {
        let mut content = format!("tree {EMPTY_TREE}\n");
        for parent in parents {
            content.push_str(&format!("parent {parent}\n"));
        }
        content.push_str(&format!("author {AUTHOR}\n\nforged\n"));

        self.write_raw(oid, &Self::with_header("commit", content.as_bytes()));
    }

    pub fn branch(&self, name: &str, oid: &str) {
        self.git_dir()
            .child("refs/heads")
            .child(name)
            .write_str(&format!("{oid}\n"))
            .expect("Failed to write branch ref");
    }

    fn write_object(&self, kind: &str, content: &[u8]) -> String {
        let raw = Self::with_header(kind, content);
        let oid = format!("{:x}", Sha1::digest(&raw));
        self.write_raw(&oid, &raw);
        oid
    }

    fn write_raw(&self, oid: &str, raw: &[u8]) {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(raw).expect("Failed to compress object");
        let compressed = encoder.finish().expect("Failed to finish compression");

        let (fan_out, rest) = oid.split_at(2);
        self.git_dir()
            .child("objects")
            .child(fan_out)
            .child(rest)
            .write_binary(&compressed)
            .expect("Failed to write object");
    }

    fn with_header(kind: &str, content: &[u8]) -> Vec<u8> {
        let mut raw = format!("{kind} {}\0", content.len()).into_bytes();
        raw.extend_from_slice(content);
        raw
    }
}
