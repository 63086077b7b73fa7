use crate::areas::database::ObjectStoreExt;
use crate::areas::repository::Repository;
use crate::error::UserError;

impl Repository {
    /// Create a new commit from the staging index
    ///
    /// The new commit starts from the parent's file map, applies the
    /// staged additions and removals, and becomes the tip of the current
    /// branch. The staging index is cleared afterwards.
    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        if message.is_empty() {
            return Err(UserError::EmptyCommitMessage.into());
        }

        if self.index().is_empty() {
            return Err(UserError::NothingToCommit.into());
        }

        let parent_oid = self.current_commit_id()?;
        let parent = self.database().read_commit(&parent_oid)?;
        let file_map = self.index().materialize_file_map(parent.file_map());

        let commit_oid = self
            .graph()
            .create_child(parent_oid, None, message.to_string(), file_map)?;
        self.refs().advance(&self.refs().current_branch()?, &commit_oid)?;

        let mut index = self.index_mut();
        index.clear();
        index.write_updates()
    }
}
