use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::UnstagedChangeType;
use crate::artifacts::status::inspector::Inspector;
use derive_new::new;
use std::collections::BTreeSet;

/// Everything the status command reports, already sorted.
///
/// Section headers and layout belong to the command; this struct only
/// carries the names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub(crate) current_branch: String,
    /// Every branch but the current one, lexicographic.
    pub(crate) other_branches: Vec<String>,
    pub(crate) staged_files: Vec<String>,
    pub(crate) removed_files: Vec<String>,
    /// Unstaged modifications and deletions, by file name.
    pub(crate) unstaged_changes: Vec<(String, UnstagedChangeType)>,
    /// Working-tree files neither staged nor tracked.
    pub(crate) untracked_files: Vec<String>,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl Status<'_> {
    pub fn collect(&self) -> anyhow::Result<StatusReport> {
        let repository = self.repository;

        let current_branch = repository.refs().current_branch()?;
        let other_branches = repository
            .refs()
            .list_branches()?
            .into_iter()
            .filter(|name| *name != current_branch)
            .collect();

        let index = repository.index();
        let commit = repository.current_commit()?;
        let workspace_files = repository.workspace().list_file_names()?;

        let staged_files = index
            .additions()
            .map(|(name, _)| name.clone())
            .collect::<Vec<_>>();
        let removed_files = index.removals().cloned().collect::<Vec<_>>();

        // Any name the commit, the index or the working tree knows may
        // carry an unstaged change.
        let mut candidates = BTreeSet::new();
        candidates.extend(commit.file_map().keys().cloned());
        candidates.extend(staged_files.iter().cloned());
        candidates.extend(removed_files.iter().cloned());
        candidates.extend(workspace_files.iter().cloned());

        let inspector = Inspector::new(repository);
        let mut unstaged_changes = Vec::new();

        for name in candidates {
            let change = inspector.unstaged_change_of(
                &name,
                commit.blob_id(&name),
                index.staged_blob_id(&name),
                index.is_removal_staged(&name),
            )?;

            if let Some(change) = change {
                unstaged_changes.push((name, change));
            }
        }

        let untracked_files = workspace_files
            .into_iter()
            .filter(|name| !index.is_staged(name) && !commit.tracks(name))
            .collect();

        Ok(StatusReport {
            current_branch,
            other_branches,
            staged_files,
            removed_files,
            unstaged_changes,
            untracked_files,
        })
    }
}
