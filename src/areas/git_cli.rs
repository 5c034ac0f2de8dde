//! Commit graph backed by the `git` command line
//!
//! Every query runs one `git` process in the repository directory and blocks
//! until it exits. Nothing here writes to the repository.
//!
//! | Query | Command |
//! |---|---|
//! | commit exists | `git cat-file -e <ref>^0` |
//! | ancestry | `git merge-base --is-ancestor <ancestor> <descendant>` |
//! | parents | `git log -1 --format=%P <commit> --` |
//! | message | `git log -1 --format=%B <commit> --` |
//! | full id | `git rev-parse --verify --quiet <ref>^{commit}` |

use crate::artifacts::history::CommitGraph;
use crate::artifacts::objects::commit_ref::{CommitRef, ParentSet};
use crate::errors::{FollowError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Environment variable naming the git executable to run
pub const GIT_BINARY_ENV: &str = "FOLLOW_BRANCH_GIT";
const DEFAULT_GIT_BINARY: &str = "git";

#[derive(Debug, Clone)]
pub struct GitCli {
    path: Box<Path>,
    git_binary: PathBuf,
}

impl GitCli {
    pub fn new(path: Box<Path>, git_binary: PathBuf) -> Self {
        Self { path, git_binary }
    }

    /// Use the git executable named by `FOLLOW_BRANCH_GIT`, or `git` from `PATH`
    pub fn load_from_env(path: Box<Path>) -> Self {
        let git_binary = std::env::var_os(GIT_BINARY_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GIT_BINARY));

        Self::new(path, git_binary)
    }

    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.git_binary.display(), args.join(" "))
    }

    /// Run git and hand back its raw output, whatever the exit status
    fn run(&self, args: &[&str]) -> Result<Output> {
        debug_log!("running `{}` in {}", self.describe(args), self.path.display());

        Command::new(&self.git_binary)
            .args(args)
            .current_dir(&self.path)
            .output()
            .map_err(|source| FollowError::GitSpawn {
                command: self.describe(args),
                source,
            })
    }

    /// Run git and return its stdout, failing on a non-zero exit status
    fn stdout(&self, args: &[&str]) -> Result<String> {
        let output = self.run(args)?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(self.command_error(args, &output))
        }
    }

    fn command_error(&self, args: &[&str], output: &Output) -> FollowError {
        FollowError::GitCommand {
            command: self.describe(args),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            exit_code: output.status.code(),
        }
    }
}

impl CommitGraph for GitCli {
    fn is_valid_commit(&self, reference: &CommitRef) -> Result<bool> {
        let peeled = format!("{reference}^0");
        let output = self.run(&["cat-file", "-e", &peeled])?;

        Ok(output.status.success())
    }

    fn is_ancestor(&self, ancestor: &CommitRef, descendant: &CommitRef) -> Result<bool> {
        let args = [
            "merge-base",
            "--is-ancestor",
            ancestor.as_ref(),
            descendant.as_ref(),
        ];
        let output = self.run(&args)?;

        match output.status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(self.command_error(&args, &output)),
        }
    }

    fn parents(&self, commit: &CommitRef) -> Result<ParentSet> {
        let stdout = self.stdout(&["log", "-1", "--format=%P", commit.as_ref(), "--"])?;

        Ok(stdout.split_whitespace().map(CommitRef::from).collect())
    }

    fn commit_message(&self, commit: &CommitRef) -> Result<String> {
        let stdout = self.stdout(&["log", "-1", "--format=%B", commit.as_ref(), "--"])?;

        Ok(stdout.trim_end().to_string())
    }

    fn resolve_commit(&self, reference: &CommitRef) -> Result<CommitRef> {
        let peeled = format!("{reference}^{{commit}}");
        let stdout = self.stdout(&["rev-parse", "--verify", "--quiet", &peeled])?;

        Ok(CommitRef::from(stdout.trim()))
    }
}
