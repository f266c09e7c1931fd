//! Core library for fplsync.
//!
//! This crate provides the fetch, transform and publish stages that turn
//! the bootstrap-static snapshot into a versioned CSV file.

mod error;
mod export;
mod fetch;
mod lookup;
mod pipeline;
mod publish;
mod table;
mod transform;

#[cfg(test)]
mod testing;

pub use error::{FetchError, FetchResult, PublishError, PublishResult};
pub use export::{to_csv_string, write_csv, write_to};
pub use fetch::{Fetcher, TableSource, build_table};
pub use lookup::{PositionLookup, TeamLookup};
pub use pipeline::{SyncPipeline, SyncReport};
pub use publish::{COMMIT_TIME_FORMAT, PublishOutcome, Publisher, commit_message};
pub use table::PlayerTable;
pub use transform::process_element;
