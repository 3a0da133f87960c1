use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::errors::TopoError;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the git directory inside a work tree
pub const GIT_DIR_NAME: &str = ".git";

pub struct Repository {
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the repository whose work tree root is `path`
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let git_dir = path.join(GIT_DIR_NAME);
        if !git_dir.is_dir() {
            return Err(TopoError::InvalidRepositoryStructure {
                path: git_dir,
                reason: format!("{GIT_DIR_NAME} is not a directory"),
            }
            .into());
        }

        let database = Database::new(git_dir.join("objects").into_boxed_path());
        let refs = Refs::new(git_dir.into_boxed_path());

        Ok(Repository {
            writer: RefCell::new(writer),
            database,
            refs,
        })
    }

    /// Find the closest enclosing repository, starting at `start` and walking up
    ///
    /// The process working directory is never changed; the root found here is
    /// what every later lookup is relative to.
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("failed to resolve {:?}", start))?;

        let root = start
            .ancestors()
            .find(|dir| dir.join(GIT_DIR_NAME).exists())
            .ok_or_else(|| TopoError::RepositoryNotFound {
                start: start.clone(),
            })?;

        tracing::debug!(root = %root.display(), "discovered repository");

        Self::new(root, writer)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
