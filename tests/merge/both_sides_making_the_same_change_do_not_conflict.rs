use crate::common::command::{command_stdout, commit_file, repository_dir, run_grit_command};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// Both branches delete `old.txt` and independently add an identical
/// `same.txt`. Equal changes agree, so the merge commits without a
/// conflict.
#[rstest]
fn both_sides_making_the_same_change_do_not_conflict(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_grit_command(dir.path(), &["init"]).assert().success();
    commit_file(dir.path(), "old.txt", "obsolete", "add old");

    run_grit_command(dir.path(), &["branch", "twin"])
        .assert()
        .success();

    run_grit_command(dir.path(), &["rm", "old.txt"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["commit", "master cleanup"])
        .assert()
        .success();
    commit_file(dir.path(), "same.txt", "agreed", "master adds same");

    run_grit_command(dir.path(), &["checkout", "twin"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["rm", "old.txt"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["commit", "twin cleanup"])
        .assert()
        .success();
    commit_file(dir.path(), "same.txt", "agreed", "twin adds same");

    run_grit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["merge", "twin"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(read_file(dir.path(), "same.txt"), "agreed");
    assert!(!dir.path().join("old.txt").exists());

    let log = command_stdout(dir.path(), &["log"]);
    assert!(log.contains("Merged twin into master."));

    Ok(())
}
