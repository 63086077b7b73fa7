use crate::areas::database::{Database, ObjectStore, ObjectStoreExt};
use crate::areas::index::StagingIndex;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::graph::CommitGraph;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::UserError;
use anyhow::Context;
use std::cell::{Ref, RefCell, RefMut};
use std::path::Path;

/// Name of the metadata directory at the working-tree root
pub const METADATA_DIR: &str = ".grit";

/// One command's view of a repository
///
/// Owns the working tree, the object store, the staging index and the
/// refs, plus the writer all command output goes through.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Box<dyn ObjectStore>,
    index: RefCell<StagingIndex>,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let metadata_path = path.join(METADATA_DIR);

        let database = Database::new(metadata_path.join("objects").into_boxed_path());
        let mut index = StagingIndex::new(metadata_path.join("index").into_boxed_path());
        index.rehydrate()?;
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(metadata_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database: Box::new(database),
            index: RefCell::new(index),
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> Box<Path> {
        self.path.join(METADATA_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &dyn ObjectStore {
        self.database.as_ref()
    }

    pub fn index(&'_ self) -> Ref<'_, StagingIndex> {
        self.index.borrow()
    }

    pub fn index_mut(&'_ self) -> RefMut<'_, StagingIndex> {
        self.index.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn graph(&'_ self) -> CommitGraph<'_> {
        CommitGraph::new(self.database.as_ref())
    }

    pub fn initialized(&self) -> bool {
        self.metadata_path().exists()
    }

    /// Every command except `init` requires a repository
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if !self.initialized() {
            return Err(UserError::NotInitialized.into());
        }

        Ok(())
    }

    /// ID of the commit the active branch points at
    pub fn current_commit_id(&self) -> anyhow::Result<ObjectId> {
        let branch_name = self.refs.current_branch()?;
        self.refs
            .read_ref(&branch_name)?
            .with_context(|| format!("branch {branch_name} does not point at a commit"))
    }

    /// The commit the active branch points at
    pub fn current_commit(&self) -> anyhow::Result<Commit> {
        self.database.read_commit(&self.current_commit_id()?)
    }
}
