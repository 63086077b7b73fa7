use crate::areas::repository::Repository;
use crate::artifacts::status::report::Status;
use std::io::Write;

impl Repository {
    /// Show branches, staged files and workspace changes
    ///
    /// Five sections, each sorted lexicographically and followed by one
    /// blank line. The active branch is marked with `*`.
    pub fn status(&self) -> anyhow::Result<()> {
        let report = Status::new(self).collect()?;
        let mut writer = self.writer();

        writeln!(writer, "=== Branches ===")?;
        writeln!(writer, "*{}", report.current_branch)?;
        for branch_name in &report.other_branches {
            writeln!(writer, "{branch_name}")?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Staged Files ===")?;
        for name in &report.staged_files {
            writeln!(writer, "{name}")?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Removed Files ===")?;
        for name in &report.removed_files {
            writeln!(writer, "{name}")?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Modifications Not Staged For Commit ===")?;
        for (name, change) in &report.unstaged_changes {
            writeln!(writer, "{name} ({change})")?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== Untracked Files ===")?;
        for name in &report.untracked_files {
            writeln!(writer, "{name}")?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
