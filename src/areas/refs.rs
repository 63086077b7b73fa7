//! Branch references and HEAD
//!
//! References are human-readable names pointing to commits:
//! - Branches: plain files under `refs/heads/<name>` containing a commit
//!   SHA-1
//! - HEAD: the single symbolic reference, containing
//!   `ref: refs/heads/<name>` for the active branch
//!
//! Branch pointers only ever move through this module; nothing here
//! reads or writes objects.

use crate::artifacts::objects::object_id::ObjectId;
use crate::error::UserError;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for the HEAD indirection
const HEAD_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Branch reference manager
///
/// Handles reading and writing branch pointer files and the HEAD
/// indirection under the metadata directory.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (`.grit`)
    path: Box<Path>,
}

impl Refs {
    /// Name of the branch every repository starts on
    pub const DEFAULT_BRANCH: &'static str = "master";

    /// Read the name of the active branch out of HEAD
    pub fn current_branch(&self) -> anyhow::Result<String> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {head_path:?}"))?;
        let content = content.trim();

        let captures = regex::Regex::new(HEAD_REGEX)?
            .captures(content)
            .with_context(|| format!("malformed HEAD reference: {content}"))?;

        Ok(captures[1].to_string())
    }

    /// Point HEAD at another branch
    pub fn switch_active(&self, branch_name: &str) -> anyhow::Result<()> {
        self.write_ref_file(self.head_path(), format!("ref: refs/heads/{branch_name}"))
    }

    pub fn branch_exists(&self, branch_name: &str) -> bool {
        self.branch_path(branch_name).exists()
    }

    /// Read the commit ID a branch points at
    ///
    /// # Returns
    ///
    /// None when no branch with that name exists.
    pub fn read_ref(&self, branch_name: &str) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(branch_name);
        if !branch_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {branch_path:?}"))?;

        Ok(Some(ObjectId::try_parse(content.trim().to_string())?))
    }

    /// Create a new branch pointing at the given commit
    ///
    /// Fails with a user error when a branch with that name already
    /// exists.
    pub fn create_branch(&self, branch_name: &str, source_oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(branch_name) {
            return Err(UserError::BranchExists.into());
        }

        self.write_ref_file(self.branch_path(branch_name), source_oid.to_string())
    }

    /// Delete a branch pointer
    ///
    /// The commits it pointed at stay in the object store. Fails with a
    /// user error when the branch does not exist or is the active one.
    pub fn delete_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        if !self.branch_exists(branch_name) {
            return Err(UserError::BranchMissing.into());
        }
        if self.current_branch()? == branch_name {
            return Err(UserError::DeleteCurrentBranch.into());
        }

        let branch_path = self.branch_path(branch_name);
        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {branch_path:?}"))?;

        Ok(())
    }

    /// Move an existing branch pointer to another commit
    pub fn advance(&self, branch_name: &str, oid: &ObjectId) -> anyhow::Result<()> {
        self.write_ref_file(self.branch_path(branch_name), oid.to_string())
    }

    /// List every branch name, lexicographically sorted
    pub fn list_branches(&self) -> anyhow::Result<Vec<String>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                Some(relative_path.to_string_lossy().to_string())
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn write_ref_file(&self, path: Box<Path>, raw_ref: String) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!("failed to create parent directories for ref file at {path:?}")
        })?)?;

        std::fs::write(&path, raw_ref.as_bytes())
            .with_context(|| format!("failed to write ref file at {path:?}"))?;

        Ok(())
    }

    fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    fn heads_path(&self) -> Box<Path> {
        self.path.join("refs").join("heads").into_boxed_path()
    }

    fn branch_path(&self, branch_name: &str) -> Box<Path> {
        self.heads_path().join(branch_name).into_boxed_path()
    }
}
