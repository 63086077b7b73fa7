use crate::common::command::{command_stdout, repository_dir, run_grit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn a_commit_with_nothing_staged_is_refused(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;
    run_grit_command(dir.path(), &["init"]).assert().success();

    run_grit_command(dir.path(), &["commit", "nothing here"])
        .assert()
        .success()
        .stdout(predicate::eq("No changes added to the commit.\n"));

    // history still holds only the initial commit
    let log = command_stdout(dir.path(), &["log"]);
    assert_eq!(log.matches("===").count(), 1);

    Ok(())
}
