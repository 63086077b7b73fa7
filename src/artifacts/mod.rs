//! Version-control data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `graph`: Commit DAG traversal and construction
//! - `merge`: Three-way merge and split point selection
//! - `objects`: Object types (blob, commit) and their encodings
//! - `status`: Working tree status inspection

pub mod graph;
pub mod merge;
pub mod objects;
pub mod status;
