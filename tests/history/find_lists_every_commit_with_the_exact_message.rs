use crate::common::command::{
    command_stdout, commit_file, head_commit_id, run_grit_command, seeded_repository_dir,
};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn find_lists_every_commit_with_the_exact_message(
    seeded_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_repository_dir;

    commit_file(dir.path(), "f.txt", "v1", "wug");
    let first_wug = head_commit_id(dir.path());

    run_grit_command(dir.path(), &["branch", "dev"])
        .assert()
        .success();
    run_grit_command(dir.path(), &["checkout", "dev"])
        .assert()
        .success();
    commit_file(dir.path(), "g.txt", "v2", "wug");
    let second_wug = head_commit_id(dir.path());

    // an exact-match search must not pick this one up
    commit_file(dir.path(), "h.txt", "v3", "wug!");

    let output = command_stdout(dir.path(), &["find", "wug"]);
    let mut found = output.lines().collect::<Vec<_>>();
    found.sort_unstable();

    let mut expected = vec![first_wug.as_str(), second_wug.as_str()];
    expected.sort_unstable();

    assert_eq!(found, expected);

    Ok(())
}
