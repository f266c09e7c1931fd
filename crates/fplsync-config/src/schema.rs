//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Default bootstrap-static endpoint.
pub const DEFAULT_SOURCE_URL: &str = "https://fantasy.premierleague.com/api/bootstrap-static/";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where player data is fetched from.
    #[serde(default)]
    pub source: SourceConfig,

    /// Where the CSV is written.
    #[serde(default)]
    pub output: OutputConfig,

    /// How the CSV is committed and pushed.
    #[serde(default)]
    pub git: GitConfig,
}

/// Source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Bootstrap-static endpoint URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds. Unset keeps the HTTP client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// User agent sent with the request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("fplsync/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// CSV file name, relative to the repository root.
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: default_filename(),
        }
    }
}

fn default_filename() -> String {
    "fpl_player_statistics.csv".to_string()
}

/// Git configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitConfig {
    /// Commit author name, set on the repository before committing.
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Commit author email.
    #[serde(default = "default_user_email")]
    pub user_email: String,

    /// Commit message prefix; the run timestamp is appended.
    #[serde(default = "default_message_prefix")]
    pub message_prefix: String,

    /// Push after committing.
    #[serde(default = "default_true")]
    pub push: bool,

    /// Remote to push to. Unset uses the branch's upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,

    /// Branch to push. Only used together with `remote`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            user_email: default_user_email(),
            message_prefix: default_message_prefix(),
            push: true,
            remote: None,
            branch: None,
        }
    }
}

fn default_user_name() -> String {
    "github-actions[bot]".to_string()
}

fn default_user_email() -> String {
    "github-actions[bot]@users.noreply.github.com".to_string()
}

fn default_message_prefix() -> String {
    "FPL data update".to_string()
}

fn default_true() -> bool {
    true
}
