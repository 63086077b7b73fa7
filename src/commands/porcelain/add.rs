use crate::areas::database::ObjectStoreExt;
use crate::areas::repository::Repository;
use crate::error::UserError;

impl Repository {
    /// Stage a file for the next commit
    pub fn add(&self, name: &str) -> anyhow::Result<()> {
        if !self.workspace().file_exists(name) {
            return Err(UserError::FileMissing.into());
        }

        let blob = self.workspace().parse_blob(name)?;
        let blob_oid = self.database().store(&blob)?;

        let current = self.current_commit()?;
        let mut index = self.index_mut();

        // re-adding the committed content clears both pending states
        if current.blob_id(name) == Some(&blob_oid) {
            index.unstage(name);
        } else {
            index.add(name, blob_oid);
        }

        index.write_updates()
    }
}
