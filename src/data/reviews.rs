//! Labelled review dataset ingestion.

use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::info;

/// One labelled row of the training dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRecord {
    /// Free-text review body.
    #[serde(rename = "Review")]
    pub text: String,
    /// Binary sentiment label: 1 liked, 0 disliked.
    #[serde(rename = "Liked")]
    pub liked: u8,
}

/// Load the tab-separated dataset into an ordered record sequence.
///
/// Quoting is disabled: literal quote characters inside a review are kept
/// as-is rather than treated as field delimiters.
pub fn load_dataset(path: &Path) -> Result<Vec<ReviewRecord>> {
    if !path.exists() {
        bail!("dataset not found at {}", path.display());
    }
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening dataset {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize::<ReviewRecord>() {
        let record = row.context("malformed dataset row")?;
        if record.liked > 1 {
            bail!("label out of range in dataset: {}", record.liked);
        }
        records.push(record);
    }
    if records.is_empty() {
        bail!("dataset at {} contains no rows", path.display());
    }

    let positives = records.iter().filter(|r| r.liked == 1).count();
    info!(
        total = records.len(),
        positives,
        negatives = records.len() - positives,
        "dataset loaded"
    );
    Ok(records)
}
