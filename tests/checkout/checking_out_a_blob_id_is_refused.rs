use crate::common::command::{run_grit_command, seeded_repository_dir};
use assert_fs::TempDir;
use bytes::Bytes;
use grit::artifacts::objects::blob::Blob;
use grit::artifacts::objects::object::Object;
use predicates::prelude::predicate;
use rstest::rstest;

/// Blob IDs live in the same store as commit IDs but never resolve as
/// commit references.
#[rstest]
fn checking_out_a_blob_id_is_refused(
    seeded_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = seeded_repository_dir;

    // content addressing puts the seeded "one" blob at a predictable ID
    let blob_oid = Blob::new(Bytes::from_static(b"one")).object_id()?.to_string();
    let blob_path = dir
        .path()
        .join(".grit")
        .join("objects")
        .join(&blob_oid[..2])
        .join(&blob_oid[2..]);
    assert!(blob_path.is_file());

    run_grit_command(dir.path(), &["checkout", &blob_oid, "--", "1.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("No commit with that id exists.\n"));

    Ok(())
}
