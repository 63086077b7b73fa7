//! Object types and their canonical encodings
//!
//! Everything the engine persists is an object identified by the SHA-1 hash
//! of its canonical encoding. There are two object types:
//!
//! - **Blob**: one file's raw byte content at a point in time
//! - **Commit**: a snapshot node (message, timestamp, 0-2 parents, file map)
//!
//! All objects implement serialization/deserialization for the format
//! `<type> <size>\0<content>`. The content encoding is deterministic (stable
//! field order, sorted file map), so two independently constructed objects
//! with identical logical content always hash to the same id.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
