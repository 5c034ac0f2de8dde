//! Branch-following data structures and algorithms
//!
//! - `history`: the read-only commit graph queries the walk depends on
//! - `merge`: merge message shapes and merge parent classification
//! - `objects`: commit references
//! - `walk`: the backward walk along a named branch

pub mod history;
pub mod merge;
pub mod objects;
pub mod walk;
