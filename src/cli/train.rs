//! CLI entry-point for the offline training pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{config::Settings, model};

/// Run the full training pipeline.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Override the TSV dataset path (defaults to DATA_DIR/DATASET_FILE).
    #[arg(long)]
    pub dataset: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let dataset = args.dataset.unwrap_or_else(|| settings.dataset_path());
    model::train_pipeline(&settings, &dataset).await
}
