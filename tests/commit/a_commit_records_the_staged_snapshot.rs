use crate::common::command::{
    command_stdout, head_commit_id, repository_dir, run_grit_command, stage_file,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn a_commit_records_the_staged_snapshot(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_grit_command(dir.path(), &["init"]).assert().success();

    stage_file(dir.path(), "a.txt", "hello");
    run_grit_command(dir.path(), &["commit", "add a"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let tip = head_commit_id(dir.path());

    // the snapshot is addressable by a short ID prefix after the file drifts
    write_file(FileSpec::new(
        dir.path().join("a.txt"),
        "scribble".to_string(),
    ));
    run_grit_command(dir.path(), &["checkout", &tip[..7], "--", "a.txt"])
        .assert()
        .success();
    assert_eq!(read_file(dir.path(), "a.txt"), "hello");

    let log = command_stdout(dir.path(), &["log"]);
    assert!(log.contains(&format!("commit {tip}")));
    assert!(log.contains("add a"));

    // committing cleared the staging index
    let status = command_stdout(dir.path(), &["status"]);
    assert!(status.contains("=== Staged Files ===\n\n"));
    assert!(status.contains("=== Removed Files ===\n\n"));

    Ok(())
}
