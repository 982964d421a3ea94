//! Command-line interface wiring for ner-workbench.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod analyze;
pub mod fetch;
pub mod models;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Named entity recognition workbench", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => analyze::run(args, settings).await,
            Commands::Fetch(args) => fetch::run(args, settings).await,
            Commands::Models => models::run(settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract entities from text on the command line.
    Analyze(analyze::Args),
    /// Install bundled model lexicons into the models directory.
    Fetch(fetch::Args),
    /// List supported models and their availability.
    Models,
    /// Serve the web UI and JSON API.
    Serve(serve::Args),
}
