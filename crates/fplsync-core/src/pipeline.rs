//! Fetch-then-publish orchestration.

use tracing::{error, info, warn};

use crate::fetch::TableSource;
use crate::publish::{PublishOutcome, Publisher};
use crate::{FetchError, PublishError};

/// How a sync run ended.
#[derive(Debug)]
pub enum SyncReport {
    /// The source had no players; nothing was published.
    NoData,

    /// Fetching or transforming failed; nothing was published.
    FetchFailed(FetchError),

    /// The table was published.
    Published(PublishOutcome),

    /// Publishing failed part way. Earlier steps are not rolled back.
    PublishFailed(PublishError),
}

impl SyncReport {
    /// Returns true if the run completed without errors.
    ///
    /// A run that found no data is not successful.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Published(_))
    }
}

/// Runs the fetch/transform stage and, only on success, the publish stage.
pub struct SyncPipeline {
    source: Box<dyn TableSource>,
    publisher: Publisher,
}

impl SyncPipeline {
    /// Creates a new pipeline.
    #[must_use]
    pub fn new(source: Box<dyn TableSource>, publisher: Publisher) -> Self {
        Self { source, publisher }
    }

    /// Returns a reference to the publisher.
    pub fn publisher(&self) -> &Publisher {
        &self.publisher
    }

    /// Runs the pipeline once. Failures are logged and reported, never raised.
    pub fn run(&self) -> SyncReport {
        let table = match self.source.fetch_table() {
            Ok(Some(table)) => table,
            Ok(None) => {
                warn!("no player data, skipping publish");
                return SyncReport::NoData;
            }
            Err(e) => {
                error!(error = %e, cause = ?std::error::Error::source(&e), "failed to fetch player data");
                return SyncReport::FetchFailed(e);
            }
        };

        match self.publisher.publish(&table) {
            Ok(outcome) => {
                info!(?outcome, "sync finished");
                SyncReport::Published(outcome)
            }
            Err(e) if e.is_git_missing() => {
                error!(error = %e, "git command not found");
                SyncReport::PublishFailed(e)
            }
            Err(e) => {
                error!(error = %e, "failed to publish player data");
                SyncReport::PublishFailed(e)
            }
        }
    }
}
