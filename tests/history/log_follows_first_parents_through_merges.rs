use crate::common::command::{
    branch_tip, command_stdout, commit_file, run_grit_command, seeded_repository_dir,
};
use assert_fs::TempDir;
use rstest::rstest;

/// History after the merge:
///
/// ```text
/// initial --- seed --- main ----- M   (master)
///                \              /
///                 side --------+      (side)
/// ```
///
/// `log` from M follows first parents only, so the side commit shows up
/// as a `Merge:` short ID but never as its own entry.
#[rstest]
fn log_follows_first_parents_through_merges(
    seeded_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_repository_dir;

    run_grit_command(dir.path(), &["branch", "side"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["checkout", "side"])
        .assert()
        .success();
    commit_file(dir.path(), "s.txt", "s", "add side file");
    let side_tip = branch_tip(dir.path(), "side");

    run_grit_command(dir.path(), &["checkout", "master"])
        .assert()
        .success();
    commit_file(dir.path(), "m.txt", "m", "add main file");
    let master_tip = branch_tip(dir.path(), "master");

    run_grit_command(dir.path(), &["merge", "side"])
        .assert()
        .success();

    let log = command_stdout(dir.path(), &["log"]);
    assert!(log.contains("Merged side into master."));
    assert!(log.contains(&format!(
        "Merge: {} {}",
        &master_tip[..7],
        &side_tip[..7]
    )));
    assert!(log.contains("add main file"));
    assert!(log.contains("initial commit"));
    // the second parent's history is not walked
    assert!(!log.contains("add side file"));

    Ok(())
}
