//! Sync command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use fplsync_config::is_repo_relative;
use fplsync_core::{Fetcher, PublishOutcome, Publisher, SyncPipeline, SyncReport};
use tracing::info;

use super::resolve_config;

/// Arguments for the sync command.
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Repository directory (default: current directory)
    #[arg(short, long, env = "FPLSYNC_REPO")]
    pub repo: Option<PathBuf>,

    /// Output file, relative to the repository
    #[arg(short, long)]
    pub output: Option<String>,

    /// Bootstrap-static endpoint URL
    #[arg(long, env = "FPLSYNC_URL")]
    pub url: Option<String>,

    /// Commit but do not push
    #[arg(long)]
    pub no_push: bool,

    /// Exit with an error when no data was fetched or publishing failed
    #[arg(long)]
    pub strict: bool,
}

/// Runs the sync command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: SyncArgs, config_path: Option<&Path>) -> Result<()> {
    let repo = match args.repo {
        Some(repo) => repo,
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    let mut config = resolve_config(config_path, &repo)?;
    if let Some(url) = args.url {
        config.source.url = url;
    }
    if let Some(output) = args.output {
        if !is_repo_relative(Path::new(&output)) {
            bail!("--output must be a path inside the repository: {output}");
        }
        config.output.filename = output;
    }
    if args.no_push {
        config.git.push = false;
    }

    info!(repo = %repo.display(), file = %config.output.filename, "starting sync");
    println!("Fetching data from {}...", config.source.url);

    let fetcher = Fetcher::new(&config.source).context("failed to create HTTP client")?;
    let publisher = Publisher::new(&repo, &config.output.filename, config.git.clone());
    let output_path = publisher.output_path();
    let pipeline = SyncPipeline::new(Box::new(fetcher), publisher);

    let report = pipeline.run();
    match &report {
        SyncReport::NoData => {
            println!("No player data in the response, canceling save process.");
        }
        SyncReport::FetchFailed(e) => {
            println!("Failed to fetch FPL data, canceling save process: {e}");
        }
        SyncReport::Published(PublishOutcome::Unchanged) => {
            println!("Data saved to {}", output_path.display());
            println!("No changes to commit.");
        }
        SyncReport::Published(PublishOutcome::Committed { commit, pushed }) => {
            println!("Data saved to {}", output_path.display());
            println!("Committed {}: {}", commit.short_hash(), commit.summary);
            if *pushed {
                println!("Data successfully pushed.");
            } else {
                println!("Push skipped.");
            }
        }
        SyncReport::PublishFailed(e) if e.is_git_missing() => {
            println!("Error: 'git' command not found. Make sure Git is installed.");
        }
        SyncReport::PublishFailed(e) => {
            println!("An error occurred while publishing: {e}");
        }
    }

    if args.strict && !report.is_success() {
        bail!("sync did not complete");
    }

    Ok(())
}
