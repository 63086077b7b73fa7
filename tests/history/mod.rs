mod find_lists_every_commit_with_the_exact_message;
mod log_follows_first_parents_through_merges;
