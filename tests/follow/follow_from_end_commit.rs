use crate::common::command::{repository_dir, run_follow_command};
use crate::common::history::{commit, expected_output};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// Starting at the ending commit emits no path and an empty report
#[rstest]
fn follow_from_end_commit(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    commit(dir, "Commit A");
    let b = commit(dir, "Commit B");

    run_follow_command(dir, &[&b, &b, "main"])
        .assert()
        .success()
        .stdout(predicate::eq(expected_output(&[], &[])));

    Ok(())
}

/// The root commit is its own ancestor, so walking from it to itself succeeds
#[rstest]
fn follow_from_root_commit_to_itself(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let a = commit(dir, "Commit A");

    run_follow_command(dir, &[&a, &a, "main"])
        .assert()
        .success()
        .stdout(predicate::eq("Discarded heads:\n\n"));

    Ok(())
}
