use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Show the history of the current branch
    ///
    /// Walks first-parent links from the branch tip back to the initial
    /// commit, so the second parent of a merge commit is shown only as a
    /// `Merge:` line, never followed.
    pub fn log(&self) -> anyhow::Result<()> {
        let head_oid = self.current_commit_id()?;

        for entry in self.graph().walk_history(head_oid) {
            let (oid, commit) = entry?;
            writeln!(self.writer(), "{}", commit.log_entry(&oid))?;
            writeln!(self.writer())?;
        }

        Ok(())
    }
}
