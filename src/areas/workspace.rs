//! Working tree access
//!
//! All reads and writes of user files go through here. The engine only
//! versions plain files at the top level of the working tree; the
//! metadata directory is never listed.

use crate::areas::database::{ObjectStore, ObjectStoreExt};
use crate::areas::index::StagingIndex;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::error::UserError;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};

const IGNORED_PATHS: [&str; 1] = [".grit"];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn file_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    pub fn file_exists(&self, name: &str) -> bool {
        self.file_path(name).is_file()
    }

    pub fn read_file(&self, name: &str) -> anyhow::Result<Bytes> {
        let file_path = self.file_path(name);
        let content = std::fs::read(&file_path)
            .context(format!("Unable to read file {}", file_path.display()))?;

        Ok(Bytes::from(content))
    }

    /// Read a working-tree file into a blob object
    pub fn parse_blob(&self, name: &str) -> anyhow::Result<Blob> {
        Ok(Blob::new(self.read_file(name)?))
    }

    pub fn write_file(&self, name: &str, content: &[u8]) -> anyhow::Result<()> {
        let file_path = self.file_path(name);
        std::fs::write(&file_path, content)
            .context(format!("Unable to write file {}", file_path.display()))
    }

    /// Delete a working-tree file; already gone is fine
    pub fn delete_file(&self, name: &str) -> anyhow::Result<()> {
        let file_path = self.file_path(name);
        if file_path.exists() {
            std::fs::remove_file(&file_path)
                .context(format!("Unable to delete file {}", file_path.display()))?;
        }

        Ok(())
    }

    /// List the names of all plain files at the working-tree root
    ///
    /// Subdirectories and the metadata directory are skipped. Names come
    /// back lexicographically sorted.
    pub fn list_file_names(&self) -> anyhow::Result<Vec<String>> {
        let mut names = std::fs::read_dir(&self.path)
            .context(format!(
                "Unable to read working tree {}",
                self.path.display()
            ))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|name| !IGNORED_PATHS.contains(&name.as_str()))
            .collect::<Vec<_>>();
        names.sort();

        Ok(names)
    }

    /// Write one file out of a commit's snapshot into the working tree
    ///
    /// Fails with a user error when the commit does not track the name.
    pub fn checkout_file_from_commit(
        &self,
        commit: &Commit,
        name: &str,
        store: &dyn ObjectStore,
    ) -> anyhow::Result<()> {
        let blob_oid = commit.blob_id(name).ok_or(UserError::FileNotInCommit)?;
        let blob = store.read_blob(blob_oid)?;

        self.write_file(name, blob.content())
    }

    /// Make the working tree match a target commit's snapshot
    ///
    /// Writes every file the target tracks, then deletes the files only
    /// the currently checked-out commit tracks.
    pub fn checkout_commit_files(
        &self,
        target: &Commit,
        current: &Commit,
        store: &dyn ObjectStore,
    ) -> anyhow::Result<()> {
        for (name, blob_oid) in target.file_map() {
            let blob = store.read_blob(blob_oid)?;
            self.write_file(name, blob.content())?;
        }

        for name in current.file_map().keys() {
            if !target.tracks(name) {
                self.delete_file(name)?;
            }
        }

        Ok(())
    }

    /// Check whether materializing the target would clobber an untracked
    /// file
    ///
    /// A working-tree file is in the way when the target tracks its name
    /// but neither the current commit nor the staging index knows it.
    pub fn untracked_overwritten_by(
        &self,
        target: &Commit,
        current: &Commit,
        index: &StagingIndex,
    ) -> bool {
        target.file_map().keys().any(|name| {
            self.file_exists(name) && !current.tracks(name) && !index.is_staged(name)
        })
    }
}
