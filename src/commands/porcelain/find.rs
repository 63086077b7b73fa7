use crate::areas::repository::Repository;
use crate::error::UserError;
use std::io::Write;

impl Repository {
    /// Print the IDs of all commits with exactly the given message
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let mut found = false;

        for (oid, commit) in self.graph().all_commits()? {
            if commit.message() == message {
                writeln!(self.writer(), "{oid}")?;
                found = true;
            }
        }

        if !found {
            return Err(UserError::NoCommitWithMessage.into());
        }

        Ok(())
    }
}
