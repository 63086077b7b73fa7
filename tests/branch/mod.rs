mod a_new_branch_points_at_the_current_commit;
mod rm_branch_cannot_remove_the_current_branch;
mod rm_branch_deletes_only_the_pointer;
mod rm_branch_on_a_missing_branch_is_refused;
