//! Fetching and transforming the bootstrap-static snapshot.

use std::time::Duration;

use fplsync_config::SourceConfig;
use fplsync_player::Bootstrap;
use reqwest::blocking::Client;
use tracing::{debug, info, warn};

use crate::lookup::{PositionLookup, TeamLookup};
use crate::table::PlayerTable;
use crate::transform::process_element;
use crate::{FetchError, FetchResult};

/// A source of player tables.
///
/// `Ok(None)` means the source answered but had no players; the caller
/// must not publish anything in that case.
pub trait TableSource {
    /// Produces the player table.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be retrieved or is malformed.
    fn fetch_table(&self) -> FetchResult<Option<PlayerTable>>;
}

/// Blocking HTTP client for the bootstrap-static endpoint.
pub struct Fetcher {
    client: Client,
    url: String,
}

impl Fetcher {
    /// Creates a fetcher from the source configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &SourceConfig) -> FetchResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Performs the GET request and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failures and non-success statuses.
    pub fn fetch_body(&self) -> FetchResult<String> {
        info!(url = %self.url, "fetching player data");

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| FetchError::Body {
            url: self.url.clone(),
            source,
        })?;
        debug!(bytes = body.len(), "fetched response body");

        Ok(body)
    }
}

impl TableSource for Fetcher {
    fn fetch_table(&self) -> FetchResult<Option<PlayerTable>> {
        let body = self.fetch_body()?;
        info!("data fetched, processing player stats");
        build_table(&body)
    }
}

/// Parses a bootstrap-static body and builds the sorted player table.
///
/// Returns `Ok(None)` when the payload has no player elements.
///
/// # Errors
///
/// Returns an error if the body is not JSON or a required key is missing.
pub fn build_table(body: &str) -> FetchResult<Option<PlayerTable>> {
    let bootstrap: Bootstrap = serde_json::from_str(body)?;

    if bootstrap.elements.is_empty() {
        warn!("no player elements in the response");
        return Ok(None);
    }

    let teams = TeamLookup::from_teams(&bootstrap.teams);
    let positions = PositionLookup::from_element_types(&bootstrap.element_types);
    debug!(
        teams = teams.len(),
        positions = positions.len(),
        "built lookups"
    );

    let records = bootstrap
        .elements
        .iter()
        .map(|element| process_element(element, &teams, &positions))
        .collect();
    let table = PlayerTable::from_records(records);

    info!(count = table.len(), "processed players");
    Ok(Some(table))
}
