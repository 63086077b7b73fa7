mod a_commit_records_the_staged_snapshot;
mod a_commit_with_nothing_staged_is_refused;
