//! Branch walker
//!
//! Follows a named branch backward from a starting commit to one of its
//! ancestors, choosing at every merge the parent that carries the branch and
//! collecting the other parents as discarded heads.
//!
//! ## States
//!
//! ```text
//! Validating -> CheckingReachability -> Walking -> Done
//!      \                 \                  \
//!       +-----------------+------------------+--> Failed (returned Err)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let walker = BranchWalker::try_new(&graph, EndMatch::Prefix)?;
//! let report = walker.walk(&start, &end, "main", |commit| writeln!(out, "{commit}"))?;
//! ```

use crate::artifacts::history::CommitGraph;
use crate::artifacts::merge::MERGE_SHAPES;
use crate::artifacts::merge::classifier::{MergeClassification, MergeClassifier};
use crate::artifacts::objects::commit_ref::CommitRef;
use crate::errors::{Endpoint, FollowError, Result};
use std::collections::BTreeSet;
use std::fmt;

/// Other-side parents of every merge crossed during a walk
///
/// Kept sorted so reports come out the same on every run.
pub type DiscardedHeads = BTreeSet<CommitRef>;

/// How the walk recognises that it reached the ending commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndMatch {
    /// Stop at the first commit whose name starts with the ending reference
    ///
    /// Any commit id that happens to begin with the ending reference's
    /// characters stops the walk, so this is only exact for full ids.
    #[default]
    Prefix,
    /// Resolve both endpoints to full ids and stop only on equality
    Exact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    Validating,
    CheckingReachability,
    Walking,
    Done,
}

impl fmt::Display for WalkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WalkState::Validating => "validating",
            WalkState::CheckingReachability => "checking reachability",
            WalkState::Walking => "walking",
            WalkState::Done => "done",
        };
        write!(f, "{name}")
    }
}

/// Where the walk goes from one commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentStep {
    /// The commit has no parents
    Root,
    /// The commit has a single parent, which is on the branch
    Linear(CommitRef),
    /// The commit is a merge; one parent continues the branch
    Merge(MergeClassification),
}

impl ParentStep {
    pub fn next_commit(&self) -> Option<&CommitRef> {
        match self {
            ParentStep::Root => None,
            ParentStep::Linear(parent) => Some(parent),
            ParentStep::Merge(classification) => Some(&classification.same_branch_parent),
        }
    }
}

/// Terminal result of a successful walk
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalkReport {
    /// Number of commits handed to the path sink
    pub steps: usize,
    pub discarded: DiscardedHeads,
}

impl WalkReport {
    /// Discarded heads as a single line, each followed by a space
    pub fn discarded_line(&self) -> String {
        self.discarded
            .iter()
            .map(|head| format!("{head} "))
            .collect()
    }
}

pub struct BranchWalker<'g, G>
where
    G: CommitGraph + ?Sized,
{
    graph: &'g G,
    classifier: MergeClassifier,
    end_match: EndMatch,
}

impl<'g, G> BranchWalker<'g, G>
where
    G: CommitGraph + ?Sized,
{
    /// Create a walker over `graph` that classifies merges with the built-in
    /// message shapes
    pub fn try_new(graph: &'g G, end_match: EndMatch) -> Result<Self> {
        Ok(Self::with_classifier(
            graph,
            MergeClassifier::try_new(&MERGE_SHAPES)?,
            end_match,
        ))
    }

    pub fn with_classifier(graph: &'g G, classifier: MergeClassifier, end_match: EndMatch) -> Self {
        Self {
            graph,
            classifier,
            end_match,
        }
    }

    /// Decide where the branch goes from `commit`
    ///
    /// # Arguments
    ///
    /// * `commit` - The commit currently on the branch
    /// * `branch_name` - Name of the followed branch, used for merges
    ///
    /// # Returns
    ///
    /// `Root` for a parentless commit, `Linear` for a single parent, and the
    /// classified parents for a merge. Merges with more than two parents fail.
    pub fn follow_parent(&self, commit: &CommitRef, branch_name: &str) -> Result<ParentStep> {
        let parents = self.graph.parents(commit)?;

        debug_log!(
            "commit {}: parents [{}]",
            commit.to_short_ref(),
            parents
                .iter()
                .map(|p| p.to_short_ref())
                .collect::<Vec<_>>()
                .join(", ")
        );

        match parents.as_slice() {
            [] => Ok(ParentStep::Root),
            [parent] => Ok(ParentStep::Linear(parent.clone())),
            _ => self
                .classifier
                .classify(self.graph, commit, &parents, branch_name)
                .map(ParentStep::Merge),
        }
    }

    /// Walk from `start` back to `end` along `branch_name`
    ///
    /// Every commit reached after `start` is passed to `on_step` as soon as it
    /// is known, in walk order. The walk stops when the current commit matches
    /// `end` or when a root commit is reached.
    ///
    /// # Errors
    ///
    /// * `InvalidReference` if either endpoint is not a commit
    /// * `UnreachableAncestor` if `end` is not an ancestor of `start`
    /// * any classification error raised at a merge on the way
    /// * `Output` if `on_step` fails
    pub fn walk<F>(
        &self,
        start: &CommitRef,
        end: &CommitRef,
        branch_name: &str,
        mut on_step: F,
    ) -> Result<WalkReport>
    where
        F: FnMut(&CommitRef) -> std::io::Result<()>,
    {
        self.enter(WalkState::Validating);
        self.validate(start, Endpoint::Starting)?;
        self.validate(end, Endpoint::Ending)?;

        self.enter(WalkState::CheckingReachability);
        if !self.graph.is_ancestor(end, start)? {
            return Err(FollowError::UnreachableAncestor {
                ending: end.clone(),
                starting: start.clone(),
            });
        }

        let (mut current, end) = match self.end_match {
            EndMatch::Prefix => (start.clone(), end.clone()),
            EndMatch::Exact => (
                self.graph.resolve_commit(start)?,
                self.graph.resolve_commit(end)?,
            ),
        };

        self.enter(WalkState::Walking);
        let mut report = WalkReport::default();

        while !self.is_end(&current, &end) {
            let step = self.follow_parent(&current, branch_name)?;
            let next = match step {
                ParentStep::Root => break,
                ParentStep::Linear(parent) => parent,
                ParentStep::Merge(MergeClassification {
                    same_branch_parent,
                    other_parent,
                }) => {
                    debug_log!("discarding {}", other_parent.to_short_ref());
                    report.discarded.insert(other_parent);
                    same_branch_parent
                }
            };

            on_step(&next)?;
            report.steps += 1;
            current = next;
        }

        self.enter(WalkState::Done);
        Ok(report)
    }

    fn validate(&self, reference: &CommitRef, endpoint: Endpoint) -> Result<()> {
        if self.graph.is_valid_commit(reference)? {
            Ok(())
        } else {
            Err(FollowError::InvalidReference {
                endpoint,
                reference: reference.clone(),
            })
        }
    }

    fn is_end(&self, current: &CommitRef, end: &CommitRef) -> bool {
        match self.end_match {
            EndMatch::Prefix => current.starts_with(end),
            EndMatch::Exact => current == end,
        }
    }

    #[allow(unused_variables)]
    fn enter(&self, state: WalkState) {
        debug_log!("walk: {}", state);
    }
}
