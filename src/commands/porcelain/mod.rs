//! Porcelain commands (user-facing version-control operations)
//!
//! Porcelain commands provide the high-level user interface for version
//! control. They compose the repository areas into workflows and report
//! user mistakes as [`UserError`](crate::error::UserError) values, which
//! `main` prints as a single line.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage a file for the next commit
//! - `commit`: Create a new commit from the staging index
//! - `rm`: Unstage a file or stage it for removal
//! - `log`: Show the history of the current branch
//! - `global-log`: Show every commit in the repository
//! - `find`: List commit IDs by exact message
//! - `status`: Show branches, staged files and workspace changes
//! - `checkout`: Restore files or switch branches
//! - `branch`: Create a branch
//! - `rm-branch`: Delete a branch
//! - `reset`: Move the current branch to another commit
//! - `merge`: Merge a branch into the current one

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod global_log;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod rm_branch;
pub mod status;
