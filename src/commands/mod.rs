//! Command implementations
//!
//! - `porcelain`: user-facing commands built on the branch walk

pub mod porcelain;
