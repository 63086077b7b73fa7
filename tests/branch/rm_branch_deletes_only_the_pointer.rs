use crate::common::command::{command_stdout, commit_file, run_grit_command, seeded_repository_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn rm_branch_deletes_only_the_pointer(
    seeded_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_repository_dir;

    run_grit_command(dir.path(), &["branch", "dev"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["checkout", "dev"])
        .assert()
        .success();
    commit_file(dir.path(), "d.txt", "d", "dev work");
    run_grit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();

    run_grit_command(dir.path(), &["rm-branch", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let dev_ref = dir
        .path()
        .join(".grit")
        .join("refs")
        .join("heads")
        .join("dev");
    assert!(!dev_ref.exists());

    // the commits the branch pointed at stay in the store
    let global = command_stdout(dir.path(), &["global-log"]);
    assert!(global.contains("dev work"));

    Ok(())
}
