//! Follow a named branch backward through git history
//!
//! Starting from a commit, the walk follows parent links to an ancestor,
//! choosing at each merge the parent that continues the branch. The other
//! merge parents are collected so they can be handed to `git bisect good`,
//! keeping a bisection on the followed branch.

/// Debug logging, enabled with the `debug_walk` feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Processing commit {}", commit);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_walk")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
