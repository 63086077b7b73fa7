//! Commit object
//!
//! Commits represent snapshots of the working tree at specific points in
//! time. They contain:
//! - Parent commit ID(s) (zero for the initial commit, two for merges)
//! - A timestamp with timezone
//! - A flat map from file name to blob ID (the snapshot)
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! parent <parent-sha>
//! date <unix-seconds> <timezone>
//! file <blob-sha> <file-name>
//!
//! <commit message>
//! ```
//!
//! The file lines are sorted by name, so two commits with the same
//! parents, timestamp, message and snapshot serialize to the same bytes
//! and therefore share an object ID.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// Snapshot of the working tree: file name to blob ID
///
/// Kept sorted by name so the serialized form is canonical.
pub type FileMap = BTreeMap<String, ObjectId>;

/// Commit object
///
/// Represents a snapshot of the working tree with metadata.
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Commit {
    /// Parent commit IDs (empty for the initial commit, two for merges)
    parents: Vec<ObjectId>,
    /// When the commit was created
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    /// Commit message
    message: String,
    /// Files tracked by this commit
    file_map: FileMap,
}

impl Commit {
    /// Create the root commit every repository history starts from
    ///
    /// Tracks no files and carries the fixed message "initial commit".
    pub fn initial() -> Self {
        Self::new(
            Vec::new(),
            chrono::Local::now().fixed_offset(),
            "initial commit".to_string(),
            FileMap::new(),
        )
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn first_parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn second_parent(&self) -> Option<&ObjectId> {
        self.parents.get(1)
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() == 2
    }

    pub fn file_map(&self) -> &FileMap {
        &self.file_map
    }

    /// Check whether a file name is part of this commit's snapshot
    pub fn tracks(&self, name: &str) -> bool {
        self.file_map.contains_key(name)
    }

    /// Get the blob ID recorded for a file name, if tracked
    pub fn blob_id(&self, name: &str) -> Option<&ObjectId> {
        self.file_map.get(name)
    }

    /// Format the timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    /// Render this commit as a history log entry
    ///
    /// ```text
    /// ===
    /// commit <sha>
    /// Merge: <parent-short-sha> <parent-short-sha>
    /// Date: Mon Jan 1 12:34:56 2024 +0000
    /// <message>
    /// ```
    ///
    /// The `Merge:` line only appears for two-parent commits. The entry
    /// carries no trailing newline.
    pub fn log_entry(&self, oid: &ObjectId) -> String {
        let mut lines = vec![];

        lines.push("===".to_string());
        lines.push(format!("commit {oid}"));
        if let (Some(first), Some(second)) = (self.first_parent(), self.second_parent()) {
            lines.push(format!(
                "Merge: {} {}",
                first.to_short_oid(),
                second.to_short_oid()
            ));
        }
        lines.push(format!("Date: {}", self.readable_timestamp()));
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        for parent in &self.parents {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        object_content.push(format!(
            "date {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for (name, blob_oid) in &self.file_map {
            object_content.push(format!("file {} {}", blob_oid.as_ref(), name));
        }
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");

        let mut content_bytes = Vec::new();
        content_bytes.write_all(object_content.as_bytes())?;

        let mut commit_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        commit_bytes.write_all(header.as_bytes())?;
        commit_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        // Parse all parent lines (there can be 0, 1, or 2 parents)
        let mut parents = Vec::new();
        let mut next_line = lines
            .next()
            .context("Invalid commit object: missing date line")?;

        while let Some(parent_oid) = next_line.strip_prefix("parent ") {
            parents.push(ObjectId::try_parse(parent_oid.to_string())?);

            next_line = lines
                .next()
                .context("Invalid commit object: missing date line")?;
        }

        // At this point, next_line should be the date line
        let date = next_line
            .strip_prefix("date ")
            .context("Invalid commit object: invalid date line")?;
        let timestamp = chrono::DateTime::parse_from_str(date, "%s %z")
            .context(format!("Invalid commit object: invalid date {date}"))?;

        // File lines run until the blank separator before the message
        let mut file_map = FileMap::new();
        loop {
            let line = lines
                .next()
                .context("Invalid commit object: missing message")?;
            if line.is_empty() {
                break;
            }

            let entry = line
                .strip_prefix("file ")
                .context("Invalid commit object: invalid file line")?;
            // the blob ID has a fixed length, the file name may contain spaces
            let (blob_oid, name) = entry
                .split_once(' ')
                .context("Invalid commit object: invalid file line")?;
            file_map.insert(name.to_string(), ObjectId::try_parse(blob_oid.to_string())?);
        }

        let message = lines.collect::<Vec<&str>>().join("\n");
        Ok(Self::new(parents, timestamp, message, file_map))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
