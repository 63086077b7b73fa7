use crate::common::command::{
    branch_tip, commit_file, head_commit_id, run_grit_command, seeded_repository_dir,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reset_protects_untracked_files(
    seeded_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_repository_dir;
    let seed_tip = head_commit_id(dir.path());

    commit_file(dir.path(), "3.txt", "three", "add three");
    let with_three = head_commit_id(dir.path());

    run_grit_command(dir.path(), &["reset", &seed_tip])
        .assert()
        .success();
    assert!(!dir.path().join("3.txt").exists());

    // an untracked 3.txt collides with the snapshot being restored
    write_file(FileSpec::new(
        dir.path().join("3.txt"),
        "local three".to_string(),
    ));

    run_grit_command(dir.path(), &["reset", &with_three])
        .assert()
        .success()
        .stdout(predicate::eq(
            "There is an untracked file in the way; delete it, or add and commit it first.\n",
        ));

    assert_eq!(read_file(dir.path(), "3.txt"), "local three");
    assert_eq!(branch_tip(dir.path(), "master"), seed_tip);

    Ok(())
}
