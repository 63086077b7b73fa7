use crate::areas::refs::Refs;
use crate::areas::repository::Repository;
use crate::error::UserError;
use anyhow::Context;
use std::fs;

impl Repository {
    /// Create the metadata layout and the initial commit
    ///
    /// Every repository starts on `master` with an empty initial commit,
    /// so history walks always reach a root and merges within one
    /// repository always find a common ancestor.
    pub fn init(&self) -> anyhow::Result<()> {
        if self.initialized() {
            return Err(UserError::AlreadyInitialized.into());
        }

        let metadata_path = self.metadata_path();
        fs::create_dir_all(metadata_path.join("objects"))
            .context("Failed to create the objects directory")?;

        fs::create_dir_all(metadata_path.join("refs").join("heads"))
            .context("Failed to create the refs/heads directory")?;

        let initial_oid = self.graph().create_initial()?;
        self.refs().create_branch(Refs::DEFAULT_BRANCH, &initial_oid)?;
        self.refs().switch_active(Refs::DEFAULT_BRANCH)?;

        // create the index file so later commands can rehydrate it
        self.index_mut().write_updates()?;

        Ok(())
    }
}
