use crate::common::command::{branch_tip, run_grit_command, seeded_repository_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn rm_branch_cannot_remove_the_current_branch(
    seeded_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_repository_dir;
    let tip = branch_tip(dir.path(), "master");

    run_grit_command(dir.path(), &["rm-branch", "master"])
        .assert()
        .success()
        .stdout(predicate::eq("Cannot remove the current branch.\n"));

    assert_eq!(branch_tip(dir.path(), "master"), tip);

    Ok(())
}
