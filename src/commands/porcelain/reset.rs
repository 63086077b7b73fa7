use crate::areas::database::ObjectStoreExt;
use crate::areas::repository::Repository;

impl Repository {
    /// Move the current branch to an arbitrary commit
    ///
    /// The workspace is rewritten to that commit's files and the staging
    /// index is cleared, like a branch checkout that also drags the
    /// current branch pointer along.
    pub fn reset(&self, commit_prefix: &str) -> anyhow::Result<()> {
        let target_oid = self.graph().resolve_by_prefix(commit_prefix)?;
        let target = self.database().read_commit(&target_oid)?;

        self.migrate_workspace_to(&target)?;
        self.refs().advance(&self.refs().current_branch()?, &target_oid)
    }
}
