//! Repository access
//!
//! - `git_cli`: commit graph queries answered by the `git` command line
//! - `repository`: the repository being walked and where output goes

pub mod git_cli;
pub mod repository;
