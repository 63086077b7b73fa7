use crate::areas::repository::Repository;

impl Repository {
    /// Delete a branch pointer
    ///
    /// Only the pointer goes away. The commits stay reachable through
    /// `global-log` and by ID.
    pub fn rm_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        self.refs().delete_branch(branch_name)
    }
}
