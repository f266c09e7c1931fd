//! Git layer for fplsync.
//!
//! This crate provides the working-tree operations needed to publish a file:
//! - Commit identity
//! - Staging and porcelain status
//! - Commit and push

mod error;
mod repository;
mod status;

pub use error::{GitError, GitResult};
pub use repository::{CommitInfo, Repository};
pub use status::{StatusEntry, parse_porcelain};
