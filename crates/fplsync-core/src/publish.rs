//! Publishing the table into a git working tree.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use fplsync_config::GitConfig;
use fplsync_git::{CommitInfo, Repository};
use tracing::{debug, info};

use crate::export::write_csv;
use crate::table::PlayerTable;
use crate::{PublishError, PublishResult};

/// Timestamp format embedded in commit messages.
pub const COMMIT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What a publish run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The file was written but git reported no change; nothing committed.
    Unchanged,

    /// A commit was created.
    Committed {
        /// The new commit.
        commit: CommitInfo,
        /// Whether the commit was pushed.
        pushed: bool,
    },
}

/// Builds the commit message for a run at the given time.
#[must_use]
pub fn commit_message(prefix: &str, at: &DateTime<Local>) -> String {
    format!("{prefix}: {}", at.format(COMMIT_TIME_FORMAT))
}

/// Writes the table into a repository and commits and pushes it.
pub struct Publisher {
    repo_path: PathBuf,
    filename: PathBuf,
    git: GitConfig,
    git_program: Option<PathBuf>,
}

impl Publisher {
    /// Creates a publisher for `<repo_path>/<filename>`.
    #[must_use]
    pub fn new(repo_path: impl Into<PathBuf>, filename: impl Into<PathBuf>, git: GitConfig) -> Self {
        Self {
            repo_path: repo_path.into(),
            filename: filename.into(),
            git,
            git_program: None,
        }
    }

    /// Uses the given git executable instead of `git` from `PATH`.
    #[must_use]
    pub fn with_git_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.git_program = Some(program.into());
        self
    }

    /// Returns the full path of the CSV file.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.repo_path.join(&self.filename)
    }

    /// Writes the CSV file and, if it changed, commits and pushes it.
    ///
    /// Steps are not rolled back: a failing commit leaves the written file
    /// in the working tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or a git step fails.
    pub fn publish(&self, table: &PlayerTable) -> PublishResult<PublishOutcome> {
        let path = self.output_path();
        self.write(table, &path)?;
        info!(path = %path.display(), rows = table.len(), "data saved");

        let mut repo = Repository::open(&self.repo_path)?;
        if let Some(program) = &self.git_program {
            repo = repo.with_program(program);
        }

        repo.set_identity(&self.git.user_name, &self.git.user_email)?;

        info!(file = %self.filename.display(), "staging file");
        repo.add(&self.filename)?;

        if !repo.has_changes(&self.filename)? {
            info!("no changes to commit");
            return Ok(PublishOutcome::Unchanged);
        }

        let message = commit_message(&self.git.message_prefix, &Local::now());
        info!(%message, "committing");
        repo.commit(&message)?;
        let commit = repo.head_commit()?;
        debug!(hash = %commit.short_hash(), "created commit");

        if !self.git.push {
            info!("push disabled, leaving commit local");
            return Ok(PublishOutcome::Committed {
                commit,
                pushed: false,
            });
        }

        info!("pushing to the remote repository");
        repo.push(self.git.remote.as_deref(), self.git.branch.as_deref())?;
        info!(hash = %commit.short_hash(), "data pushed");

        Ok(PublishOutcome::Committed {
            commit,
            pushed: true,
        })
    }

    fn write(&self, table: &PlayerTable, path: &Path) -> PublishResult<()> {
        if let Some(parent) = self.filename.parent().filter(|p| !p.as_os_str().is_empty()) {
            let dir = self.repo_path.join(parent);
            std::fs::create_dir_all(&dir).map_err(|source| PublishError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }

        write_csv(table, path).map_err(|source| PublishError::Csv {
            path: path.to_path_buf(),
            source,
        })
    }
}
