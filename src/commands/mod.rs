//! Command implementations
//!
//! Every command lives here as an `impl Repository` block, one file per
//! command. Commands translate CLI operands into calls on the repository
//! areas and write their output through the repository writer, so tests
//! can capture it.
//!
//! The whole surface is porcelain: objects, refs and the staging index
//! are only ever touched through these user-facing workflows.

pub mod porcelain;
