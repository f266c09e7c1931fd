//! CLI definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Publish Fantasy Premier League player statistics as a versioned CSV file.
#[derive(Debug, Parser)]
#[command(name = "fplsync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the configuration file (default: fplsync.toml, searched upwards)
    #[arg(short, long, global = true, env = "FPLSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch player data, write the CSV into a repository, commit and push
    Sync(commands::sync::SyncArgs),

    /// Fetch player data and write the CSV without touching git
    Fetch(commands::fetch::FetchArgs),

    /// Write a default fplsync.toml
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let config = self.config.as_deref();
        match self.command {
            Commands::Sync(args) => commands::sync::run(args, config),
            Commands::Fetch(args) => commands::fetch::run(args, config),
            Commands::Init(args) => commands::init::run(args),
        }
    }
}
