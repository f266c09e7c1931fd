//! Core error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while fetching and transforming player data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request failed at the transport level (DNS, connect, timeout).
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body could not be read.
    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body is not a valid bootstrap-static payload.
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors raised while publishing the table.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The CSV file could not be written.
    #[error("failed to write {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A git step failed.
    #[error(transparent)]
    Git(#[from] fplsync_git::GitError),
}

impl PublishError {
    /// Returns true if the failure is caused by a missing git executable.
    #[must_use]
    pub fn is_git_missing(&self) -> bool {
        matches!(self, Self::Git(fplsync_git::GitError::GitNotFound(_)))
    }
}

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;
