use crate::common::command::{command_stdout, run_grit_command, seeded_repository_dir, stage_file};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn rm_of_a_file_staged_but_never_committed_only_unstages_it(
    seeded_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_repository_dir;

    stage_file(dir.path(), "3.txt", "three");

    run_grit_command(dir.path(), &["rm", "3.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    // the working copy survives, only the staging entry is gone
    assert_eq!(read_file(dir.path(), "3.txt"), "three");

    let status = command_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Removed Files ===\n\n"));
    assert!(status.contains("=== Untracked Files ===\n3.txt\n"));

    Ok(())
}
