//! Content-addressed object database
//!
//! Every object lives under the key derived from its own bytes: the
//! SHA-1 of the canonical serialized form, header included. Storing the
//! same content twice is a no-op, and two logically identical objects
//! always land on the same key.
//!
//! The [`ObjectStore`] trait keeps the commit graph and the merge engine
//! independent of the backing medium; [`Database`] is the zlib-compressed
//! on-disk store used by the binary, [`MemoryDatabase`] a plain map for
//! exercising the higher layers without a filesystem.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Storage backend for content-addressed objects
pub trait ObjectStore {
    /// Store the given canonical bytes and return their object ID
    ///
    /// Idempotent: content already present is left untouched.
    fn put(&self, content: Bytes) -> anyhow::Result<ObjectId>;

    /// Load the canonical bytes stored under the given ID
    ///
    /// Fails when no object with that ID exists.
    fn get(&self, object_id: &ObjectId) -> anyhow::Result<Bytes>;

    /// List the IDs of every stored object, in unspecified order
    fn list_all(&self) -> anyhow::Result<Vec<ObjectId>>;

    /// Find all objects whose ID starts with the given hex prefix
    ///
    /// More than one match means the prefix is ambiguous; the caller
    /// decides how to report that.
    fn find_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|oid| oid.has_prefix(prefix))
            .collect())
    }
}

/// Typed reads and writes on top of any [`ObjectStore`]
pub trait ObjectStoreExt: ObjectStore {
    /// Serialize and store an object, returning its ID
    fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        self.put(object.serialize()?)
    }

    /// Read the header of a stored object and return its type tag
    fn read_object_type(&self, object_id: &ObjectId) -> anyhow::Result<ObjectType> {
        let mut reader = Cursor::new(self.get(object_id)?);
        ObjectType::parse_object_type(&mut reader)
    }

    /// Load and deserialize a blob
    fn read_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let mut reader = Cursor::new(self.get(object_id)?);

        match ObjectType::parse_object_type(&mut reader)? {
            ObjectType::Blob => Blob::deserialize(reader),
            other => anyhow::bail!("Object {object_id} is a {other}, not a blob"),
        }
    }

    /// Load and deserialize a commit
    fn read_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let mut reader = Cursor::new(self.get(object_id)?);

        match ObjectType::parse_object_type(&mut reader)? {
            ObjectType::Commit => Commit::deserialize(reader),
            other => anyhow::bail!("Object {object_id} is a {other}, not a commit"),
        }
    }
}

impl<S: ObjectStore + ?Sized> ObjectStoreExt for S {}

/// On-disk object database
///
/// Objects are zlib-compressed and fanned out over two-character
/// directories, `objects/ab/cdef...`.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

// TODO: implement packfiles for better performance and storage efficiency
impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}

impl ObjectStore for Database {
    fn put(&self, content: Bytes) -> anyhow::Result<ObjectId> {
        let object_id = ObjectId::for_content(&content)?;
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        if !object_path.exists() {
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .context(format!("Invalid object path {}", object_path.display()))?,
            )
            .context(format!(
                "Unable to create object directory {}",
                object_path.display()
            ))?;

            self.write_object(object_path, content)?;
        }

        Ok(object_id)
    }

    fn get(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        self.read_object(object_path)
    }

    fn list_all(&self) -> anyhow::Result<Vec<ObjectId>> {
        let mut object_ids = Vec::new();

        for dir_entry in std::fs::read_dir(&self.path).context(format!(
            "Unable to read objects directory {}",
            self.path.display()
        ))? {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type()?.is_dir() {
                continue;
            }

            let dir_name = dir_entry.file_name().to_string_lossy().to_string();
            for file_entry in std::fs::read_dir(dir_entry.path())? {
                let file_entry = file_entry?;
                let file_name = file_entry.file_name().to_string_lossy().to_string();

                // skip stray temp files from interrupted writes
                if let Ok(oid) = ObjectId::try_parse(format!("{dir_name}{file_name}")) {
                    object_ids.push(oid);
                }
            }
        }

        Ok(object_ids)
    }

    fn find_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        // prefixes of 2+ characters pin down the fanout directory
        if prefix.len() < 2 {
            return Ok(self
                .list_all()?
                .into_iter()
                .filter(|oid| oid.has_prefix(prefix))
                .collect());
        }

        let dir_name = &prefix[..2];
        let file_prefix = &prefix[2..];
        let dir_path = self.path.join(dir_name);

        let mut matches = Vec::new();
        if dir_path.is_dir() {
            for entry in std::fs::read_dir(&dir_path)? {
                let entry = entry?;
                let file_name = entry.file_name();
                let file_name = file_name.to_string_lossy();

                if file_name.starts_with(file_prefix)
                    && let Ok(oid) = ObjectId::try_parse(format!("{dir_name}{file_name}"))
                {
                    matches.push(oid);
                }
            }
        }

        Ok(matches)
    }
}

/// In-memory object store
///
/// Backs the unit tests for the commit graph and the merge engine.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    objects: RefCell<HashMap<ObjectId, Bytes>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ObjectStore for MemoryDatabase {
    fn put(&self, content: Bytes) -> anyhow::Result<ObjectId> {
        let object_id = ObjectId::for_content(&content)?;
        self.objects
            .borrow_mut()
            .entry(object_id.clone())
            .or_insert(content);

        Ok(object_id)
    }

    fn get(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        self.objects
            .borrow()
            .get(object_id)
            .cloned()
            .context(format!("Object {object_id} not found"))
    }

    fn list_all(&self) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self.objects.borrow().keys().cloned().collect())
    }
}
