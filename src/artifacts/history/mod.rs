//! Read-only queries over a commit graph
//!
//! The branch walk needs exactly four answers from version control: whether a
//! reference names a commit, whether one commit is an ancestor of another, the
//! parents of a commit, and its message. [`CommitGraph`] captures those so the
//! walk and the merge classifier can run against git or against a canned graph.


use crate::artifacts::objects::commit_ref::{CommitRef, ParentSet};
use crate::errors::Result;

pub trait CommitGraph {
    /// Whether `reference` resolves to a commit object, peeling tags
    ///
    /// An unknown or malformed reference is `Ok(false)`; only a failure to ask
    /// the repository at all is an error.
    fn is_valid_commit(&self, reference: &CommitRef) -> Result<bool>;

    /// Whether `ancestor` is reachable from `descendant` by parent edges
    ///
    /// Every commit is its own ancestor.
    fn is_ancestor(&self, ancestor: &CommitRef, descendant: &CommitRef) -> Result<bool>;

    /// Direct parents of `commit`, mainline parent first
    ///
    /// Empty for a root commit. An invalid `commit` is an error.
    fn parents(&self, commit: &CommitRef) -> Result<ParentSet>;

    /// Full message of `commit` (subject and body) without trailing whitespace
    fn commit_message(&self, commit: &CommitRef) -> Result<String>;

    /// Full commit id that `reference` resolves to
    fn resolve_commit(&self, reference: &CommitRef) -> Result<CommitRef>;
}
