//! A small content-addressed version-control engine
//!
//! grit keeps the history of a single flat directory: files become
//! blobs in a content-addressed object database, commits snapshot the
//! full set of tracked files, and branches are movable pointers into
//! the commit graph. Everything lives under a `.grit` directory next
//! to the files it tracks.
//!
//! The crate is organized in three layers:
//!
//! - [`areas`]: the on-disk state (object database, staging index,
//!   refs, workspace) and the [`Repository`](areas::repository::Repository)
//!   session tying them together
//! - [`artifacts`]: the data structures and algorithms (objects and
//!   their encodings, commit graph traversal, three-way merge, status
//!   inspection)
//! - [`commands`]: the user-facing porcelain, one `impl Repository`
//!   block per command

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod error;
