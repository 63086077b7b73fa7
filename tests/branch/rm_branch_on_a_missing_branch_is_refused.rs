use crate::common::command::{run_grit_command, seeded_repository_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn rm_branch_on_a_missing_branch_is_refused(
    seeded_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_repository_dir;

    run_grit_command(dir.path(), &["rm-branch", "ghost"])
        .assert()
        .success()
        .stdout(predicate::eq("A branch with that name does not exist.\n"));

    Ok(())
}
