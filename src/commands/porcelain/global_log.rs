use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Show every commit in the repository, in no particular order
    pub fn global_log(&self) -> anyhow::Result<()> {
        for (oid, commit) in self.graph().all_commits()? {
            writeln!(self.writer(), "{}", commit.log_entry(&oid))?;
            writeln!(self.writer())?;
        }

        Ok(())
    }
}
