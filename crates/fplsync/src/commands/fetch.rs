//! Fetch command.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use fplsync_core::{Fetcher, TableSource, write_csv, write_to};

use super::resolve_config;

/// Arguments for the fetch command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Bootstrap-static endpoint URL
    #[arg(long, env = "FPLSYNC_URL")]
    pub url: Option<String>,
}

/// Runs the fetch command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: FetchArgs, config_path: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let mut config = resolve_config(config_path, &cwd)?;
    if let Some(url) = args.url {
        config.source.url = url;
    }

    let fetcher = Fetcher::new(&config.source).context("failed to create HTTP client")?;
    let Some(table) = fetcher
        .fetch_table()
        .with_context(|| format!("failed to fetch player data from {}", fetcher.url()))?
    else {
        bail!("no player data in the response");
    };

    match args.output {
        Some(path) => {
            write_csv(&table, &path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Data for {} players saved to {}", table.len(), path.display());
        }
        None => {
            write_to(&table, io::stdout().lock()).context("failed to write CSV to stdout")?;
        }
    }

    Ok(())
}
