use crate::areas::repository::Repository;
use crate::artifacts::merge::{MergeEngine, MergeOutcome};
use std::io::Write;

impl Repository {
    /// Merge a branch into the current one
    ///
    /// Trivial cases are reported without creating a commit: merging an
    /// ancestor is a no-op and merging a descendant fast-forwards the
    /// current branch. Everything else produces a two-parent commit,
    /// with conflict markers written into any file both sides changed.
    pub fn merge(&self, branch_name: &str) -> anyhow::Result<()> {
        let outcome = MergeEngine::new(self).merge(branch_name)?;

        match outcome {
            MergeOutcome::AlreadyAncestor => {
                writeln!(
                    self.writer(),
                    "Given branch is an ancestor of the current branch."
                )?;
            }
            MergeOutcome::FastForwarded => {
                writeln!(self.writer(), "Current branch fast-forwarded.")?;
            }
            MergeOutcome::Merged { conflict: true } => {
                writeln!(self.writer(), "Encountered a merge conflict.")?;
            }
            MergeOutcome::Merged { conflict: false } => {}
        }

        Ok(())
    }
}
