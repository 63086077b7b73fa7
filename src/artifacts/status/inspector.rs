use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::UnstagedChangeType;
use derive_new::new;

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl Inspector<'_> {
    /// Detect a change to `name` that no staging action accounts for.
    ///
    /// `tracked` and `staged` are the blob ids the current commit and the
    /// staging index hold for the name, `removal_staged` whether its
    /// removal is pending. A file counts as modified when its working-tree
    /// content drifted from the version the next commit would record, and
    /// as deleted when that version exists but the file is gone.
    pub fn unstaged_change_of(
        &self,
        name: &str,
        tracked: Option<&ObjectId>,
        staged: Option<&ObjectId>,
        removal_staged: bool,
    ) -> anyhow::Result<Option<UnstagedChangeType>> {
        let workspace = self.repository.workspace();

        if !workspace.file_exists(name) {
            if staged.is_some() || (tracked.is_some() && !removal_staged) {
                return Ok(Some(UnstagedChangeType::Deleted));
            }
            return Ok(None);
        }

        let on_disk = workspace.parse_blob(name)?.object_id()?;

        if let Some(tracked_oid) = tracked
            && *tracked_oid != on_disk
            && staged.is_none()
            && !removal_staged
        {
            return Ok(Some(UnstagedChangeType::Modified));
        }
        if let Some(staged_oid) = staged
            && *staged_oid != on_disk
        {
            return Ok(Some(UnstagedChangeType::Modified));
        }

        Ok(None)
    }
}
