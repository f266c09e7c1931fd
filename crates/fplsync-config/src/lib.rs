//! Configuration management for fplsync.
//!
//! This crate handles loading and validating the `fplsync.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAME, default_config_toml, find_and_load_config_from, is_repo_relative,
    load_config, load_or_default,
};
pub use schema::{Config, DEFAULT_SOURCE_URL, GitConfig, OutputConfig, SourceConfig};
