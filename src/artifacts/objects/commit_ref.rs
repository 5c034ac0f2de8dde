//! Commit references
//!
//! A commit reference is whatever git accepts as a commit name: a full or
//! abbreviated hash, a branch, a tag. It is treated as opaque text; the only
//! structure relied on is equality and textual prefix matching.

use derive_new::new;
use std::fmt;

/// Number of characters shown for abbreviated commit ids in diagnostics
const SHORT_REF_LENGTH: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct CommitRef(String);

impl CommitRef {
    /// Whether this reference textually begins with `other`
    ///
    /// This is how the walk recognises its end commit by default, so a short
    /// end hash matches the full hashes git reports for parents.
    pub fn starts_with(&self, other: &CommitRef) -> bool {
        self.0.starts_with(other.0.as_str())
    }

    pub fn to_short_ref(&self) -> &str {
        match self.0.char_indices().nth(SHORT_REF_LENGTH) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl AsRef<str> for CommitRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CommitRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CommitRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direct parents of a commit, in the order git lists them
///
/// The first parent is the mainline parent of a merge.
pub type ParentSet = Vec<CommitRef>;
