use crate::common::command::{repository_dir, run_follow_command};
use crate::common::history::{checkout, commit, create_branch, merge};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

/// History: A <- {M, B, C} <- O <- T, where O merges main, b and c at once
///
/// The walk prints O, then fails at the octopus merge.
#[rstest]
fn follow_through_octopus_merge(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let a = commit(dir, "Commit A");

    create_branch(dir, "b");
    commit(dir, "Commit B");
    checkout(dir, "main");
    create_branch(dir, "c");
    commit(dir, "Commit C");
    checkout(dir, "main");
    commit(dir, "Commit M");

    let o = merge(dir, &["b", "c"], "Merge branches 'b' and 'c'");
    let t = commit(dir, "Commit T");

    run_follow_command(dir, &[&t, &a, "main"])
        .assert()
        .failure()
        .stdout(predicate::eq(format!("{o}\n")))
        .stderr(predicate::str::contains("octopus merges are not supported"));

    Ok(())
}

#[rstest]
#[case("Integrate the login work")]
#[case("Merge pull request #42 from org/login")]
#[case("merge branch 'login'")]
fn follow_through_unclassifiable_merge(
    repository_dir: TempDir,
    #[case] message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    let a = commit(dir, "Commit A");

    create_branch(dir, "login");
    commit(dir, "Commit L");
    checkout(dir, "main");
    commit(dir, "Commit B");

    let m = merge(dir, &["login"], message);

    run_follow_command(dir, &[&m, &a, "main"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!(
            "can't tell from the message of merge commit {m}"
        )));

    Ok(())
}
