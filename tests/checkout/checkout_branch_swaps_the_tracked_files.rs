use crate::common::command::{command_stdout, commit_file, run_grit_command, seeded_repository_dir};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn checkout_branch_swaps_the_tracked_files(
    seeded_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_repository_dir;

    run_grit_command(dir.path(), &["branch", "dev"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["checkout", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    commit_file(dir.path(), "dev.txt", "d", "add dev file");
    commit_file(dir.path(), "1.txt", "one on dev", "revise one on dev");

    run_grit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    // master's snapshot is restored in full
    assert_eq!(read_file(dir.path(), "1.txt"), "one");
    assert_eq!(read_file(dir.path(), "2.txt"), "two");
    assert!(!dir.path().join("dev.txt").exists());

    let status = command_stdout(dir.path(), &["status"]);
    assert!(status.starts_with("=== Branches ===\n*master\ndev\n\n"));

    // and switching back restores dev's view
    run_grit_command(dir.path(), &["checkout", "dev"])
        .assert()
        .success();
    assert_eq!(read_file(dir.path(), "1.txt"), "one on dev");
    assert_eq!(read_file(dir.path(), "dev.txt"), "d");

    Ok(())
}
