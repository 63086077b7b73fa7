//! User-facing error taxonomy
//!
//! Every failure a user can provoke (bad reference, dirty index, unsafe
//! checkout, ...) is a `UserError` variant with a fixed one-line message.
//! By convention of this tool family a user error prints its message to
//! stdout and the process exits with the same status as success; only
//! unexpected I/O failures abort with a non-zero status. `main` downcasts
//! the `anyhow` chain to tell the two apart.

use thiserror::Error;

/// A user error: reported verbatim on stdout, then the command terminates
/// as if it had succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    // Setup
    #[error("A grit version-control system already exists in the current directory.")]
    AlreadyInitialized,
    #[error("Not in an initialized grit directory.")]
    NotInitialized,

    // References
    #[error("No commit with that id exists.")]
    UnknownCommit,
    #[error("Ambiguous commit ID prefix.")]
    AmbiguousCommitPrefix,
    #[error("No such branch exists.")]
    NoSuchBranch,
    #[error("A branch with that name does not exist.")]
    BranchMissing,
    #[error("A branch with that name already exists.")]
    BranchExists,
    #[error("Cannot remove the current branch.")]
    DeleteCurrentBranch,
    #[error("No need to checkout the current branch.")]
    CheckoutCurrentBranch,
    #[error("Cannot merge a branch with itself.")]
    SelfMerge,

    // Staging and tracking
    #[error("File does not exist.")]
    FileMissing,
    #[error("Please enter a commit message.")]
    EmptyCommitMessage,
    #[error("No changes added to the commit.")]
    NothingToCommit,
    #[error("No reason to remove the file.")]
    NothingToRemove,
    #[error("File does not exist in that commit.")]
    FileNotInCommit,
    #[error("You have uncommitted changes.")]
    UncommittedChanges,
    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    // Working-tree safety
    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedOverwrite,

    // Command-line surface
    #[error("Please enter a command.")]
    MissingCommand,
    #[error("No command with that name exists.")]
    UnknownCommand,
    #[error("Incorrect operands.")]
    IncorrectOperands,
}
