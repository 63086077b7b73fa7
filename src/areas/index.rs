//! Staging index
//!
//! The index tracks which changes go into the next commit: files staged
//! for addition (name to blob ID) and files staged for removal. The next
//! commit's snapshot is its parent's file map with the removals dropped
//! and the additions laid on top.
//!
//! ## Index File Format
//!
//! Persisted at `.grit/index` as a line-oriented text file:
//!
//! ```text
//! GRIT-INDEX v1
//! add <blob-sha> <file-name>
//! rm <file-name>
//! ```
//!
//! The signature line is validated on load so a foreign or corrupt file
//! fails loudly instead of being read as an empty index.

use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

pub const SIGNATURE: &str = "GRIT-INDEX";
pub const VERSION: u32 = 1;

/// Staging index
///
/// Both pending sets are kept sorted so the persisted form and every
/// listing derived from them are deterministic.
#[derive(Debug, Clone)]
pub struct StagingIndex {
    /// Path to the index file (`.grit/index`)
    path: Box<Path>,
    /// Files staged for addition, name to blob ID
    added: BTreeMap<String, ObjectId>,
    /// Files staged for removal
    removed: BTreeSet<String>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl StagingIndex {
    pub fn new(path: Box<Path>) -> Self {
        StagingIndex {
            path,
            added: BTreeMap::new(),
            removed: BTreeSet::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// A missing index file means an empty index; the file appears on the
    /// first write so read-only commands never touch the filesystem.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.added.clear();
        self.removed.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path).context(format!(
            "Unable to read staging index {}",
            self.path.display()
        ))?;
        if content.is_empty() {
            return Ok(());
        }

        let mut lines = content.lines();
        self.parse_signature(lines.next().unwrap_or_default())?;

        for line in lines {
            if let Some(entry) = line.strip_prefix("add ") {
                // the blob ID has a fixed length, the file name may contain spaces
                let (blob_oid, name) = entry
                    .split_once(' ')
                    .context(format!("Invalid staging index entry: {line}"))?;
                self.added
                    .insert(name.to_string(), ObjectId::try_parse(blob_oid.to_string())?);
            } else if let Some(name) = line.strip_prefix("rm ") {
                self.removed.insert(name.to_string());
            } else {
                return Err(anyhow!("Invalid staging index entry: {line}"));
            }
        }

        Ok(())
    }

    fn parse_signature(&self, line: &str) -> anyhow::Result<()> {
        let version = line
            .strip_prefix(SIGNATURE)
            .ok_or_else(|| anyhow!("Invalid staging index signature"))?;
        let version = version
            .strip_prefix(" v")
            .and_then(|v| v.parse::<u32>().ok())
            .ok_or_else(|| anyhow!("Invalid staging index signature"))?;

        if version != VERSION {
            return Err(anyhow!("Unsupported staging index version: {version}"));
        }

        Ok(())
    }

    /// Persist the index
    ///
    /// Skipped when nothing changed since the last load, unless the file
    /// does not exist yet.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed && self.path.exists() {
            return Ok(());
        }

        let mut lines = vec![format!("{SIGNATURE} v{VERSION}")];
        for (name, blob_oid) in &self.added {
            lines.push(format!("add {blob_oid} {name}"));
        }
        for name in &self.removed {
            lines.push(format!("rm {name}"));
        }
        lines.push(String::new());

        std::fs::write(&self.path, lines.join("\n")).context(format!(
            "Unable to write staging index {}",
            self.path.display()
        ))?;
        self.changed = false;

        Ok(())
    }

    /// Stage a file for addition, dropping any pending removal of it
    pub fn add(&mut self, name: &str, blob_oid: ObjectId) {
        self.added.insert(name.to_string(), blob_oid);
        self.removed.remove(name);
        self.changed = true;
    }

    /// Stage a file for removal, dropping any pending addition of it
    pub fn remove(&mut self, name: &str) {
        self.removed.insert(name.to_string());
        self.added.remove(name);
        self.changed = true;
    }

    /// Forget everything staged about a file, addition and removal alike
    pub fn unstage(&mut self, name: &str) {
        self.added.remove(name);
        self.removed.remove(name);
        self.changed = true;
    }

    /// Drop every pending change
    pub fn clear(&mut self) {
        self.added.clear();
        self.removed.clear();
        self.changed = true;
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn is_staged(&self, name: &str) -> bool {
        self.added.contains_key(name)
    }

    pub fn is_removal_staged(&self, name: &str) -> bool {
        self.removed.contains(name)
    }

    pub fn staged_blob_id(&self, name: &str) -> Option<&ObjectId> {
        self.added.get(name)
    }

    pub fn additions(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.added.iter()
    }

    pub fn removals(&self) -> impl Iterator<Item = &String> {
        self.removed.iter()
    }

    /// Build the next commit's snapshot from a base file map
    ///
    /// Removals are dropped first, then additions overlaid.
    pub fn materialize_file_map(&self, base: &FileMap) -> FileMap {
        let mut file_map = base.clone();

        for name in &self.removed {
            file_map.remove(name);
        }
        for (name, blob_oid) in &self.added {
            file_map.insert(name.clone(), blob_oid.clone());
        }

        file_map
    }
}
