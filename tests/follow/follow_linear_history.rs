use crate::common::command::{repository_dir, run_follow_command};
use crate::common::history::{commit, expected_output};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// History: A <- B <- C <- D
///
/// Following main from D to A visits every commit and discards nothing.
#[rstest]
fn follow_linear_history(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let a = commit(dir, "Commit A");
    let b = commit(dir, "Commit B");
    let c = commit(dir, "Commit C");
    let d = commit(dir, "Commit D");

    run_follow_command(dir, &[&d, &a, "main"])
        .assert()
        .success()
        .stdout(predicate::eq(expected_output(&[&c, &b, &a], &[])));

    Ok(())
}

/// The starting commit may be given as a branch name
#[rstest]
fn follow_linear_history_from_branch_name(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let a = commit(dir, "Commit A");
    let b = commit(dir, "Commit B");
    commit(dir, "Commit C");

    run_follow_command(dir, &["main~1", &a, "main"])
        .assert()
        .success()
        .stdout(predicate::eq(expected_output(&[&a], &[])));

    run_follow_command(dir, &["main", &b, "main"])
        .assert()
        .success()
        .stdout(predicate::eq(expected_output(&[&b], &[])));

    Ok(())
}

/// An abbreviated ending commit stops the walk on the commit it prefixes
#[rstest]
fn follow_linear_history_to_abbreviated_end(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let a = commit(dir, "Commit A");
    let b = commit(dir, "Commit B");
    let c = commit(dir, "Commit C");

    run_follow_command(dir, &[&c, &b[..10], "main"])
        .assert()
        .success()
        .stdout(predicate::eq(expected_output(&[&b], &[])));

    run_follow_command(dir, &[&c, &a[..7], "main"])
        .assert()
        .success()
        .stdout(predicate::eq(expected_output(&[&b, &a], &[])));

    Ok(())
}
