use crate::common::command::{
    branch_tip, command_stdout, commit_file, run_grit_command, seeded_repository_dir,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn merge_protects_untracked_files(
    seeded_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_repository_dir;

    run_grit_command(dir.path(), &["branch", "dev"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["checkout", "dev"])
        .assert()
        .success();
    commit_file(dir.path(), "d.txt", "committed d", "add d");

    run_grit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    commit_file(dir.path(), "m.txt", "m", "master moves");
    let tip = branch_tip(dir.path(), "master");

    // an untracked d.txt collides with the incoming snapshot
    write_file(FileSpec::new(
        dir.path().join("d.txt"),
        "local".to_string(),
    ));

    run_grit_command(dir.path(), &["merge", "dev"])
        .assert()
        .success()
        .stdout(predicate::eq(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        ));

    // refused before anything happened
    assert_eq!(read_file(dir.path(), "d.txt"), "local");
    assert_eq!(branch_tip(dir.path(), "master"), tip);
    let log = command_stdout(dir.path(), &["log"]);
    assert!(!log.contains("Merged dev into master."));

    Ok(())
}
