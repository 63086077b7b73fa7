//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `database`: Content-addressed object store for blobs and commits
//! - `index`: Staging area tracking pending additions and removals
//! - `refs`: Branch pointers and the HEAD indirection
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
