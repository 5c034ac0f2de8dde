//! Commit identifiers as seen by the branch walk
//!
//! Commits are never loaded or parsed here: git answers every question about
//! them, so a commit is represented only by the name git knows it by.

pub mod commit_ref;
