//! Configuration loader.

use std::io::ErrorKind;
use std::path::{Component, Path};

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "fplsync.toml";

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io(e),
    })?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;

    Ok(config)
}

/// Finds and loads configuration starting from the given directory.
///
/// Walks up the directory tree until a configuration file is found.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be parsed.
pub fn find_and_load_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    let start_dir = start_dir.as_ref();
    let mut dir = start_dir;

    loop {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return load_config(config_path);
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAME)))
}

/// Loads configuration from the given directory or its parents, falling back
/// to defaults when no configuration file exists.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be parsed.
pub fn load_or_default(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    match find_and_load_config_from(start_dir) {
        Err(ConfigError::NotFound(path)) => {
            debug!(?path, "no configuration file, using defaults");
            Ok(Config::default())
        }
        other => other,
    }
}

/// Renders the default configuration as a TOML document.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn default_config_toml() -> ConfigResult<String> {
    Ok(toml::to_string_pretty(&Config::default())?)
}

/// Returns true if `path` names a file inside the repository: non-empty,
/// relative, and without `..` components.
#[must_use]
pub fn is_repo_relative(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && path.components().any(|c| matches!(c, Component::Normal(_)))
}

fn validate(config: &Config) -> ConfigResult<()> {
    if config.source.url.trim().is_empty() {
        return Err(ConfigError::Invalid("source.url must not be empty".to_string()));
    }

    if config.output.filename.trim().is_empty()
        || !is_repo_relative(Path::new(&config.output.filename))
    {
        return Err(ConfigError::Invalid(format!(
            "output.filename must be a path inside the repository: {:?}",
            config.output.filename
        )));
    }

    if config.git.branch.is_some() && config.git.remote.is_none() {
        return Err(ConfigError::Invalid(
            "git.branch requires git.remote".to_string(),
        ));
    }

    Ok(())
}
