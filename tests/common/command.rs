use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// An initialized repository whose first real commit tracks `1.txt`
/// ("one") and `2.txt` ("two").
#[fixture]
pub fn seeded_repository_dir(repository_dir: TempDir) -> TempDir {
    run_grit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    stage_file(repository_dir.path(), "1.txt", "one");
    stage_file(repository_dir.path(), "2.txt", "two");

    run_grit_command(repository_dir.path(), &["commit", "seed two files"])
        .assert()
        .success();

    repository_dir
}

pub fn run_grit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("grit").expect("Failed to find grit binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Write `content` into `name` under `dir` and stage it.
pub fn stage_file(dir: &Path, name: &str, content: &str) {
    write_file(FileSpec::new(dir.join(name), content.to_string()));
    run_grit_command(dir, &["add", name]).assert().success();
}

/// Write, stage and commit one file in a single step.
pub fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    stage_file(dir, name, content);
    run_grit_command(dir, &["commit", message])
        .assert()
        .success();
}

/// Run a command expected to succeed and capture its stdout.
pub fn command_stdout(dir: &Path, args: &[&str]) -> String {
    let assertion = run_grit_command(dir, args).assert().success();
    String::from_utf8(assertion.get_output().stdout.clone()).expect("stdout was not UTF-8")
}

/// Read the commit ID a branch points at.
pub fn branch_tip(dir: &Path, branch: &str) -> String {
    let path = dir.join(".grit").join("refs").join("heads").join(branch);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read branch file {path:?}: {e}"))
        .trim()
        .to_string()
}

/// Resolve HEAD to the commit ID the active branch points at.
pub fn head_commit_id(dir: &Path) -> String {
    let head_content =
        std::fs::read_to_string(dir.join(".grit").join("HEAD")).expect("Failed to read HEAD");
    let branch = head_content
        .trim()
        .strip_prefix("ref: refs/heads/")
        .expect("HEAD is not a symbolic reference");

    branch_tip(dir, branch)
}

/// Commit IDs printed by `log`, newest first.
pub fn log_commit_ids(dir: &Path) -> Vec<String> {
    commit_ids_in(&command_stdout(dir, &["log"]))
}

/// Commit IDs printed by `global-log`, in store order.
pub fn global_log_commit_ids(dir: &Path) -> Vec<String> {
    commit_ids_in(&command_stdout(dir, &["global-log"]))
}

pub fn commit_ids_in(log_output: &str) -> Vec<String> {
    log_output
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(|oid| oid.to_string())
        .collect()
}

/// Count the object files persisted under `.grit/objects`.
pub fn stored_object_count(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir.join(".grit").join("objects"))
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .count()
}
