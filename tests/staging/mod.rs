mod rm_of_a_file_staged_but_never_committed_only_unstages_it;
