//! Three-way merge
//!
//! Merging a given branch `G` into the current branch `C` works from
//! their split point `S`, the latest commit reachable from both tips.
//! Every file named by any of the three snapshots is classified by
//! comparing its blob id in `S`, `C` and `G`; only files both sides
//! changed in different ways conflict.
//!
//! ## Split point
//!
//! Among all commits reachable from both tips (following both parents
//! of merge commits), the split point is the one minimizing the sum of
//! its distances from `C` and from `G`. Ties are broken by digest order
//! so repeated merges of the same history pick the same base.
//!
//! ## Debug Logging
//!
//! Build with the `debug_merge` feature to trace split point selection
//! and per-file conflicts on stderr.

use crate::areas::database::{ObjectStore, ObjectStoreExt};
use crate::areas::repository::Repository;
use crate::artifacts::graph::CommitGraph;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::UserError;
use anyhow::anyhow;
use bytes::Bytes;
use derive_new::new;
use std::collections::BTreeSet;

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(any(feature = "debug_merge"))]
        {
            eprintln!($($arg)*);
        }
    };
}

/// How a merge ended; the caller turns this into a report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The given branch is already part of the current branch's history.
    AlreadyAncestor,
    /// The current branch had nothing of its own; its pointer moved to
    /// the given tip without a merge commit.
    FastForwarded,
    /// A two-parent merge commit was created.
    Merged { conflict: bool },
}

/// What to do with one file of the merged snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileResolution {
    KeepCurrent,
    TakeGiven,
    Conflict,
}

/// Classifies one file by its blob id in the three snapshots.
///
/// `None` means the snapshot does not track the file. A side "changed"
/// the file when its entry differs from the split point's, deletion
/// included.
pub fn classify(
    split: Option<&ObjectId>,
    current: Option<&ObjectId>,
    given: Option<&ObjectId>,
) -> FileResolution {
    let current_changed = current != split;
    let given_changed = given != split;

    match (current_changed, given_changed) {
        (_, false) => FileResolution::KeepCurrent,
        (false, true) => FileResolution::TakeGiven,
        (true, true) if current == given => FileResolution::KeepCurrent,
        (true, true) => FileResolution::Conflict,
    }
}

/// Finds the split point of two commits.
///
/// Errors only on histories without a common root, which a repository
/// grown from `init` cannot produce.
pub fn split_point(
    store: &dyn ObjectStore,
    a: &ObjectId,
    b: &ObjectId,
) -> anyhow::Result<ObjectId> {
    let graph = CommitGraph::new(store);
    let depths_from_a = graph.ancestor_depths(a)?;
    let depths_from_b = graph.ancestor_depths(b)?;

    let mut candidates = depths_from_a
        .iter()
        .filter_map(|(oid, &from_a)| {
            depths_from_b
                .get(oid)
                .map(|&from_b| (from_a + from_b, oid.clone()))
        })
        .collect::<Vec<_>>();
    candidates.sort();

    debug_log!(
        "split point candidates for {a} and {b}: {}",
        candidates
            .iter()
            .map(|(sum, oid)| format!("{oid} (depth sum {sum})"))
            .collect::<Vec<_>>()
            .join(", ")
    );

    candidates
        .into_iter()
        .map(|(_, oid)| oid)
        .next()
        .ok_or_else(|| anyhow!("no common ancestor of {a} and {b}"))
}

/// Conflict file layout: both sides between markers, a deleted side
/// contributing empty content.
pub fn conflict_content(current: &[u8], given: &[u8]) -> Bytes {
    let mut content = Vec::new();
    content.extend_from_slice(b"<<<<<<< HEAD\n");
    content.extend_from_slice(current);
    content.extend_from_slice(b"\n=======\n");
    content.extend_from_slice(given);
    content.extend_from_slice(b"\n>>>>>>>");

    Bytes::from(content)
}

/// Runs a whole merge against one repository session.
#[derive(new)]
pub struct MergeEngine<'r> {
    repository: &'r Repository,
}

impl MergeEngine<'_> {
    /// Merges the given branch into the current one.
    ///
    /// Nothing is touched until every pre-check passes: the staging
    /// index must be empty, the given branch must exist and differ from
    /// the current one, and no untracked working-tree file may collide
    /// with a file the given tip tracks.
    pub fn merge(&self, given_branch: &str) -> anyhow::Result<MergeOutcome> {
        let repository = self.repository;

        if !repository.index().is_empty() {
            return Err(UserError::UncommittedChanges.into());
        }

        let given_tip = repository
            .refs()
            .read_ref(given_branch)?
            .ok_or(UserError::BranchMissing)?;
        let current_branch = repository.refs().current_branch()?;
        if current_branch == given_branch {
            return Err(UserError::SelfMerge.into());
        }

        let store = repository.database();
        let current_tip = repository.current_commit_id()?;
        let current_commit = store.read_commit(&current_tip)?;
        let given_commit = store.read_commit(&given_tip)?;

        {
            let index = repository.index();
            let workspace = repository.workspace();
            if workspace.untracked_overwritten_by(&given_commit, &current_commit, &index) {
                return Err(UserError::UntrackedOverwrite.into());
            }
        }

        let split = split_point(store, &current_tip, &given_tip)?;
        debug_log!("merging {given_tip} into {current_tip}, split point {split}");

        if split == given_tip {
            return Ok(MergeOutcome::AlreadyAncestor);
        }
        if split == current_tip {
            repository
                .workspace()
                .checkout_commit_files(&given_commit, &current_commit, store)?;
            repository.refs().advance(&current_branch, &given_tip)?;
            return Ok(MergeOutcome::FastForwarded);
        }

        let split_commit = store.read_commit(&split)?;
        let conflict = self.stage_resolutions(&split_commit, &current_commit, &given_commit)?;

        let file_map = repository
            .index()
            .materialize_file_map(current_commit.file_map());
        let merge_oid = repository.graph().create_child(
            current_tip,
            Some(given_tip),
            format!("Merged {given_branch} into {current_branch}."),
            file_map,
        )?;
        repository.refs().advance(&current_branch, &merge_oid)?;

        let mut index = repository.index_mut();
        index.clear();
        index.write_updates()?;

        Ok(MergeOutcome::Merged { conflict })
    }

    /// Applies the per-file resolutions to the working tree and the
    /// staging index. Returns whether any file conflicted.
    fn stage_resolutions(
        &self,
        split: &Commit,
        current: &Commit,
        given: &Commit,
    ) -> anyhow::Result<bool> {
        let repository = self.repository;
        let store = repository.database();

        let names = split
            .file_map()
            .keys()
            .chain(current.file_map().keys())
            .chain(given.file_map().keys())
            .collect::<BTreeSet<_>>();

        let mut conflict = false;

        for name in names {
            let split_blob = split.blob_id(name);
            let current_blob = current.blob_id(name);
            let given_blob = given.blob_id(name);

            match classify(split_blob, current_blob, given_blob) {
                FileResolution::KeepCurrent => {}
                FileResolution::TakeGiven => match given_blob {
                    Some(blob_oid) => {
                        repository
                            .workspace()
                            .checkout_file_from_commit(given, name, store)?;
                        repository.index_mut().add(name, blob_oid.clone());
                    }
                    None => {
                        repository.workspace().delete_file(name)?;
                        repository.index_mut().remove(name);
                    }
                },
                FileResolution::Conflict => {
                    conflict = true;
                    debug_log!("conflict on {name}");

                    let content = conflict_content(
                        &blob_bytes(store, current_blob)?,
                        &blob_bytes(store, given_blob)?,
                    );
                    let blob_oid = store.store(&Blob::new(content.clone()))?;

                    repository.workspace().write_file(name, &content)?;
                    repository.index_mut().add(name, blob_oid);
                }
            }
        }

        Ok(conflict)
    }
}

fn blob_bytes(store: &dyn ObjectStore, blob_oid: Option<&ObjectId>) -> anyhow::Result<Bytes> {
    match blob_oid {
        Some(oid) => Ok(store.read_blob(oid)?.content().clone()),
        None => Ok(Bytes::new()),
    }
}
