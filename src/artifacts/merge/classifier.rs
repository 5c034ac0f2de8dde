//! Merge parent classifier
//!
//! Decides which parent of a two-parent merge commit continues the followed
//! branch, using nothing but the merge message.
//!
//! ## Message Shapes
//!
//! Git writes one of a handful of default messages when it records a merge:
//!
//! ```text
//! Merge branch 'feature'
//! Merge branch 'feature' into main
//! Merge remote-tracking branch 'origin/feature'
//! Merge commit 'a1b2c3d'
//! ```
//!
//! The quoted name is always the side that was merged *in*. The message is
//! scanned line by line; on each line the shapes in [`MERGE_SHAPES`](super::MERGE_SHAPES) are tried
//! in order and the first hit wins.
//!
//! ## Decision Rule
//!
//! - merged-in name == followed branch: the branch continues through the
//!   second parent; the first (mainline) parent is discarded
//! - otherwise: the branch continues through the first parent; the second
//!   parent is discarded
//!
//! ## Usage
//!
//! ```rust,ignore
//! let classifier = MergeClassifier::try_new(&MERGE_SHAPES)?;
//! let parents = graph.parents(&merge_commit)?;
//! let classification = classifier.classify(&graph, &merge_commit, &parents, "main")?;
//! ```

use crate::artifacts::history::CommitGraph;
use crate::artifacts::objects::commit_ref::CommitRef;
use crate::errors::{FollowError, Result};
use derive_new::new;
use regex::Regex;

/// One recognised merge message shape
///
/// `pattern` is a regex whose first capture group is the merged-in name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeShape {
    label: &'static str,
    pattern: &'static str,
}

impl MergeShape {
    pub const fn new(label: &'static str, pattern: &'static str) -> Self {
        Self { label, pattern }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// Name found in a merge message and the shape that matched it
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MergedIn<'m> {
    pub shape: MergeShape,
    pub name: &'m str,
}

/// Parents of a merge commit split by branch
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MergeClassification {
    pub same_branch_parent: CommitRef,
    pub other_parent: CommitRef,
}

#[derive(Debug, Clone)]
struct ShapeMatcher {
    shape: MergeShape,
    regex: Regex,
}

#[derive(Debug, Clone)]
pub struct MergeClassifier {
    matchers: Vec<ShapeMatcher>,
}

impl MergeClassifier {
    /// Compile the given shapes, keeping their order as match priority
    pub fn try_new(shapes: &[MergeShape]) -> Result<Self> {
        let matchers = shapes
            .iter()
            .map(|shape| {
                Regex::new(shape.pattern)
                    .map(|regex| ShapeMatcher {
                        shape: *shape,
                        regex,
                    })
                    .map_err(|source| FollowError::MergeShapePattern {
                        pattern: shape.pattern.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { matchers })
    }

    /// Find the merged-in name in a merge message
    ///
    /// Lines are scanned in order and, within a line, shapes in priority
    /// order. Returns `None` when no line matches any shape.
    pub fn merged_in_name<'m>(&self, message: &'m str) -> Option<MergedIn<'m>> {
        message.lines().find_map(|line| {
            self.matchers.iter().find_map(|matcher| {
                matcher
                    .regex
                    .captures(line)
                    .and_then(|captures| captures.get(1))
                    .map(|name| MergedIn::new(matcher.shape, name.as_str()))
            })
        })
    }

    /// Split the parents of `commit` into same-branch and other parent
    ///
    /// # Arguments
    ///
    /// * `graph` - Source of the commit's message
    /// * `commit` - A merge commit with exactly two parents
    /// * `parents` - The parents of `commit`, mainline first
    /// * `branch_name` - Name of the branch being followed, as it appears in
    ///   merge messages
    ///
    /// # Errors
    ///
    /// * `NotAMerge` if the commit has fewer than two parents
    /// * `OctopusMerge` if it has more than two
    /// * `UnclassifiableMerge` if no line of the message has a known shape
    pub fn classify<G>(
        &self,
        graph: &G,
        commit: &CommitRef,
        parents: &[CommitRef],
        branch_name: &str,
    ) -> Result<MergeClassification>
    where
        G: CommitGraph + ?Sized,
    {
        let (mainline, merged) = match parents {
            [mainline, merged] => (mainline.clone(), merged.clone()),
            [] | [_] => {
                return Err(FollowError::NotAMerge {
                    commit: commit.clone(),
                    parents: parents.len(),
                });
            }
            _ => {
                return Err(FollowError::OctopusMerge {
                    commit: commit.clone(),
                    parents: parents.len(),
                });
            }
        };

        let message = graph.commit_message(commit)?;
        let merged_in = self.merged_in_name(&message).ok_or_else(|| {
            FollowError::UnclassifiableMerge {
                commit: commit.clone(),
            }
        })?;

        debug_log!(
            "merge {}: merged in {} '{}', following '{}'",
            commit.to_short_ref(),
            merged_in.shape.label(),
            merged_in.name,
            branch_name
        );

        if merged_in.name == branch_name {
            Ok(MergeClassification::new(merged, mainline))
        } else {
            Ok(MergeClassification::new(mainline, merged))
        }
    }
}
