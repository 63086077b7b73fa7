use crate::areas::database::ObjectStoreExt;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::error::UserError;

impl Repository {
    /// Restore one file from a commit into the workspace
    ///
    /// Without a commit prefix the file comes from the tip of the
    /// current branch. The staging index is left untouched either way.
    pub fn checkout_file(&self, commit_prefix: Option<&str>, name: &str) -> anyhow::Result<()> {
        let commit = match commit_prefix {
            Some(prefix) => {
                let oid = self.graph().resolve_by_prefix(prefix)?;
                self.database().read_commit(&oid)?
            }
            None => self.current_commit()?,
        };

        self.workspace()
            .checkout_file_from_commit(&commit, name, self.database())
    }

    /// Switch to another branch
    ///
    /// Rewrites the workspace to the files of the target branch tip,
    /// points HEAD at the branch and clears the staging index.
    pub fn checkout_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let target_oid = self
            .refs()
            .read_ref(branch_name)?
            .ok_or(UserError::NoSuchBranch)?;

        if branch_name == self.refs().current_branch()? {
            return Err(UserError::CheckoutCurrentBranch.into());
        }

        let target = self.database().read_commit(&target_oid)?;
        self.migrate_workspace_to(&target)?;
        self.refs().switch_active(branch_name)?;

        Ok(())
    }

    /// Replace the workspace contents with the files of a commit
    ///
    /// Refuses to clobber untracked files, then swaps the tracked file
    /// set and clears the staging index.
    pub(crate) fn migrate_workspace_to(&self, target: &Commit) -> anyhow::Result<()> {
        let current = self.current_commit()?;

        {
            let index = self.index();
            if self
                .workspace()
                .untracked_overwritten_by(target, &current, &index)
            {
                return Err(UserError::UntrackedOverwrite.into());
            }
        }

        self.workspace()
            .checkout_commit_files(target, &current, self.database())?;

        let mut index = self.index_mut();
        index.clear();
        index.write_updates()
    }
}
