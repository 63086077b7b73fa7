use crate::common::command::{
    branch_tip, command_stdout, head_commit_id, run_grit_command, seeded_repository_dir,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn a_new_branch_points_at_the_current_commit(
    seeded_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_repository_dir;

    run_grit_command(dir.path(), &["branch", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(branch_tip(dir.path(), "dev"), head_commit_id(dir.path()));

    // creating a branch does not switch to it
    let status = command_stdout(dir.path(), &["status"]);
    assert!(status.starts_with("=== Branches ===\n*master\ndev\n\n"));

    Ok(())
}
