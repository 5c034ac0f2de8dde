//! Error types for branch following
//!
//! Every variant is fatal: the walk stops at the first error and the binary
//! exits with a non-zero status after printing the message to stderr.

use crate::artifacts::objects::commit_ref::CommitRef;
use std::fmt;

/// Which walk endpoint a reference was supplied for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Starting,
    Ending,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Starting => write!(f, "Starting"),
            Endpoint::Ending => write!(f, "Ending"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FollowError {
    #[error("{endpoint} commit '{reference}' isn't a valid commit")]
    InvalidReference {
        endpoint: Endpoint,
        reference: CommitRef,
    },

    #[error("Ending commit '{ending}' is not reachable from starting commit '{starting}'")]
    UnreachableAncestor {
        ending: CommitRef,
        starting: CommitRef,
    },

    #[error("merge commit {commit} has {parents} parents, octopus merges are not supported")]
    OctopusMerge { commit: CommitRef, parents: usize },

    #[error(
        "internal error: commit {commit} was treated as a merge but has {parents} parent(s)"
    )]
    NotAMerge { commit: CommitRef, parents: usize },

    #[error(
        "can't tell from the message of merge commit {commit} which parent is on the followed branch"
    )]
    UnclassifiableMerge { commit: CommitRef },

    #[error("`{command}` failed ({}): {stderr}", describe_exit(.exit_code))]
    GitCommand {
        command: String,
        stderr: String,
        exit_code: Option<i32>,
    },

    #[error("failed to write walk output")]
    Output(#[from] std::io::Error),

    #[error("invalid merge message pattern: {pattern}")]
    MergeShapePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to run `{command}`")]
    GitSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, FollowError>;
