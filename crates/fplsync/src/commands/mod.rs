//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use fplsync_config::{Config, load_config, load_or_default};

pub mod fetch;
pub mod init;
pub mod sync;

/// Loads the explicit configuration file, or searches upwards from `dir`
/// and falls back to defaults.
fn resolve_config(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
    match explicit {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => load_or_default(dir).context("failed to load configuration"),
    }
}
