use crate::areas::repository::Repository;

impl Repository {
    /// Create a branch pointing at the current commit
    ///
    /// The new branch is not checked out.
    pub fn branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let head_oid = self.current_commit_id()?;
        self.refs().create_branch(branch_name, &head_oid)
    }
}
