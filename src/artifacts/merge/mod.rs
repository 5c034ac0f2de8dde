//! Merge commit disambiguation
//!
//! When the walk hits a merge it must decide which parent carries on the
//! followed branch. The only evidence is the merge message git wrote, which
//! names the branch or commit that was merged in.

pub mod classifier;

use classifier::MergeShape;

pub const MERGE_BRANCH_REGEX: &str = r"Merge branch '([^']+)'";
pub const MERGE_REMOTE_TRACKING_BRANCH_REGEX: &str = r"Merge remote-tracking branch '([^']+)'";
pub const MERGE_COMMIT_REGEX: &str = r"Merge commit '([^']+)'";

/// Recognised merge message shapes, in the order they are tried on each line
pub const MERGE_SHAPES: [MergeShape; 3] = [
    MergeShape::new("branch", MERGE_BRANCH_REGEX),
    MergeShape::new("remote-tracking branch", MERGE_REMOTE_TRACKING_BRANCH_REGEX),
    MergeShape::new("commit", MERGE_COMMIT_REGEX),
];
