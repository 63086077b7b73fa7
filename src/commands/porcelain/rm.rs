use crate::areas::repository::Repository;
use crate::error::UserError;

impl Repository {
    /// Unstage a file, or stage a tracked file for removal
    ///
    /// A tracked file is also deleted from the workspace, unless the
    /// user already deleted it.
    pub fn rm(&self, name: &str) -> anyhow::Result<()> {
        let staged = self.index().is_staged(name);
        let tracked = self.current_commit()?.tracks(name);

        if !staged && !tracked {
            return Err(UserError::NothingToRemove.into());
        }

        let mut index = self.index_mut();
        if staged {
            index.unstage(name);
        }
        if tracked {
            index.remove(name);
            self.workspace().delete_file(name)?;
        }

        index.write_updates()
    }
}
