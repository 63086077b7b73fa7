//! Working-tree status inspection
//!
//! This module compares the working tree against the staging index and
//! the current commit's snapshot.
//!
//! ## Components
//!
//! - `file_change`: how an unstaged change is labelled
//! - `inspector`: per-file change detection
//! - `report`: the aggregated five-section status report

pub mod file_change;
pub mod inspector;
pub mod report;
