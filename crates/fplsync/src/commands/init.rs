//! Initialize command.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use fplsync_config::{CONFIG_FILE_NAME, default_config_toml};

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to write the configuration to (default: current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Runs the init command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: InitArgs) -> Result<()> {
    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let path = dir.join(CONFIG_FILE_NAME);

    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let content = default_config_toml().context("failed to render configuration")?;
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;

    println!("Created {}", path.display());
    Ok(())
}
