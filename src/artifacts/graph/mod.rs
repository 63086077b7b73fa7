//! Commit graph traversal on top of the object store
//!
//! Commits form a DAG: every commit except the initial one references one
//! parent (or two for merges). This module builds new commits, resolves
//! user-supplied id prefixes and walks ancestry for log and merge.

use crate::areas::database::{ObjectStore, ObjectStoreExt};
use crate::artifacts::objects::commit::{Commit, FileMap};
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::error::UserError;
use chrono::Local;
use std::collections::{HashMap, VecDeque};

/// A view of the commit DAG stored in an object store.
///
/// The graph itself is never materialized; every operation loads commits
/// on demand through the store.
pub struct CommitGraph<'s> {
    store: &'s dyn ObjectStore,
}

impl<'s> CommitGraph<'s> {
    pub fn new(store: &'s dyn ObjectStore) -> Self {
        Self { store }
    }

    /// Creates and persists the root commit every repository starts from.
    pub fn create_initial(&self) -> anyhow::Result<ObjectId> {
        self.store.store(&Commit::initial())
    }

    /// Creates and persists a commit on top of `parent`, timestamped now.
    ///
    /// Merge commits pass the tip of the merged-in branch as
    /// `second_parent`.
    pub fn create_child(
        &self,
        parent: ObjectId,
        second_parent: Option<ObjectId>,
        message: String,
        file_map: FileMap,
    ) -> anyhow::Result<ObjectId> {
        let mut parents = vec![parent];
        parents.extend(second_parent);

        let commit = Commit::new(parents, Local::now().fixed_offset(), message, file_map);
        self.store.store(&commit)
    }

    /// Resolves a (possibly abbreviated) commit id typed by the user.
    ///
    /// A prefix that matches no commit, or that matches only non-commit
    /// objects, resolves to [`UserError::UnknownCommit`]. A prefix shared
    /// by several commits resolves to [`UserError::AmbiguousCommitPrefix`].
    pub fn resolve_by_prefix(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        let mut commit_ids = Vec::new();

        for oid in self.store.find_by_prefix(prefix)? {
            if self.store.read_object_type(&oid)? == ObjectType::Commit {
                commit_ids.push(oid);
            }
        }

        match commit_ids.len() {
            0 => Err(UserError::UnknownCommit.into()),
            1 => Ok(commit_ids.remove(0)),
            _ => Err(UserError::AmbiguousCommitPrefix.into()),
        }
    }

    pub fn parents_of(&self, oid: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        Ok(self.store.read_commit(oid)?.parents().to_vec())
    }

    /// Walks history from `start` towards the root, following only first
    /// parents. The walk is lazy; commits are loaded one `next()` at a time.
    pub fn walk_history(&self, start: ObjectId) -> HistoryWalk<'s> {
        HistoryWalk {
            store: self.store,
            next: Some(start),
        }
    }

    /// Maps every ancestor of `start` (itself included, at depth zero) to
    /// its minimal distance from `start`, counting both parents of merges.
    ///
    /// A breadth-first traversal visits commits in order of increasing
    /// depth, so the first depth recorded for a commit is its minimum even
    /// when merges make it reachable along several paths.
    pub fn ancestor_depths(&self, start: &ObjectId) -> anyhow::Result<HashMap<ObjectId, u32>> {
        let mut depths = HashMap::from([(start.clone(), 0)]);
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(oid) = queue.pop_front() {
            let depth = depths[&oid];

            for parent in self.parents_of(&oid)? {
                if !depths.contains_key(&parent) {
                    depths.insert(parent.clone(), depth + 1);
                    queue.push_back(parent);
                }
            }
        }

        Ok(depths)
    }

    /// Loads every commit in the store, in no particular order.
    pub fn all_commits(&self) -> anyhow::Result<Vec<(ObjectId, Commit)>> {
        let mut commits = Vec::new();

        for oid in self.store.list_all()? {
            let content = self.store.get(&oid)?;
            let mut reader = content.as_ref();

            if ObjectType::parse_object_type(&mut reader)? == ObjectType::Commit {
                commits.push((oid, Commit::deserialize(reader)?));
            }
        }

        Ok(commits)
    }
}

/// Lazy first-parent iterator over commit history, newest first.
pub struct HistoryWalk<'s> {
    store: &'s dyn ObjectStore,
    next: Option<ObjectId>,
}

impl Iterator for HistoryWalk<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next.take()?;

        match self.store.read_commit(&oid) {
            Ok(commit) => {
                self.next = commit.first_parent().cloned();
                Some(Ok((oid, commit)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}
