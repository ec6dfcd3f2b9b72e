//! Runtime configuration utilities for review-sense.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Root folder holding the labelled review dataset.
    pub data_dir: PathBuf,
    /// Root folder for serialized model artifacts.
    pub artifacts_dir: PathBuf,
    /// Dataset file name under `data_dir`.
    pub dataset_file: String,
    /// Comma-separated allowed CORS origins; `*` permits any origin.
    pub allowed_origins: String,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let artifacts_dir = env::var("ARTIFACTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./artifacts"));
        let dataset_file =
            env::var("DATASET_FILE").unwrap_or_else(|_| "Restaurant_Reviews.tsv".to_string());
        let allowed_origins = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;
        std::fs::create_dir_all(&artifacts_dir).context("creating artifacts dir")?;

        Ok(Self {
            data_dir,
            artifacts_dir,
            dataset_file,
            allowed_origins,
        })
    }

    /// Convenience helper for derived dataset path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }

    /// Convenience helper for derived artifact path segments.
    pub fn join_artifacts<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.artifacts_dir.join(path)
    }

    /// Full path to the training dataset.
    pub fn dataset_path(&self) -> PathBuf {
        self.join_data(&self.dataset_file)
    }

    /// Where the fitted vectorizer state is persisted.
    pub fn vectorizer_path(&self) -> PathBuf {
        self.join_artifacts("tfidf-vectorizer.json")
    }

    /// Where the fitted classifier state is persisted.
    pub fn classifier_path(&self) -> PathBuf {
        self.join_artifacts("sentiment-nb.json")
    }
}
