use crate::common::command::git_stdout;
use std::path::Path;

/// Record an empty commit on the current branch and return its full id
pub fn commit(dir: &Path, message: &str) -> String {
    git_stdout(dir, &["commit", "--quiet", "--allow-empty", "-m", message]);
    head(dir)
}

/// Create `branch` at the current commit and switch to it
pub fn create_branch(dir: &Path, branch: &str) {
    git_stdout(dir, &["checkout", "--quiet", "-b", branch]);
}

pub fn checkout(dir: &Path, branch: &str) {
    git_stdout(dir, &["checkout", "--quiet", branch]);
}

/// Merge `branches` into the current branch with an explicit message,
/// always creating a merge commit, and return its id
pub fn merge(dir: &Path, branches: &[&str], message: &str) -> String {
    let mut args = vec!["merge", "--quiet", "--no-ff", "-m", message];
    args.extend_from_slice(branches);
    git_stdout(dir, &args);
    head(dir)
}

pub fn head(dir: &Path) -> String {
    git_stdout(dir, &["rev-parse", "HEAD"])
}

/// Expected stdout of a walk: one line per path commit, then the report
pub fn expected_output(path: &[&str], discarded: &[&str]) -> String {
    let mut discarded = discarded.to_vec();
    discarded.sort();

    let mut output = String::new();
    for commit in path {
        output.push_str(commit);
        output.push('\n');
    }
    output.push_str("Discarded heads:\n");
    for head in discarded {
        output.push_str(head);
        output.push(' ');
    }
    output.push('\n');
    output
}

/// Ids of the commits in the feature-merge history
///
/// ```text
///        D (main)
///       /         \
/// A <- B           C <- F      C = "Merge branch 'feature'"
///       \         /
///        E (feature)
/// ```
#[derive(Debug, Clone)]
pub struct FeatureMergeHistory {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
    pub e: String,
    pub f: String,
}

pub fn feature_merge_history(dir: &Path) -> FeatureMergeHistory {
    let a = commit(dir, "Commit A");
    let b = commit(dir, "Commit B");

    create_branch(dir, "feature");
    let e = commit(dir, "Commit E");

    checkout(dir, "main");
    let d = commit(dir, "Commit D");
    let c = merge(dir, &["feature"], "Merge branch 'feature'");
    let f = commit(dir, "Commit F");

    FeatureMergeHistory { a, b, c, d, e, f }
}
