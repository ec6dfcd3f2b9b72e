//! Command-line interface wiring for review-sense.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod serve;
pub mod train;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Restaurant review sentiment analyser", long_about = None)]
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
            Commands::Train(args) => train::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fit the vectorizer and classifier, then persist both artifacts.
    Train(train::Args),
    /// Serve the prediction API from persisted artifacts.
    Serve(serve::Args),
}
