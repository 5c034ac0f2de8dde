//! Porcelain commands
//!
//! - `follow`: walk a branch back to an ancestor and report discarded merge heads

pub mod follow;
