//! Persistence for the fitted vectorizer and classifier artifacts.

use std::{fs, io, path::Path};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use super::{bayes::MultinomialNb, vectorizer::TfidfVectorizer};

/// Failures while persisting or loading model artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// A required artifact file does not exist.
    #[error("missing model artifact at {0}")]
    Missing(String),
    /// The artifact exists but cannot be parsed.
    #[error("corrupt model artifact at {path}: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// The pair was not produced by the same training run.
    #[error(
        "artifact pair is inconsistent: vectorizer has {vocabulary} terms, \
         classifier expects {features}"
    )]
    Mismatched { vocabulary: usize, features: usize },
    #[error("artifact io failure: {0}")]
    Io(#[from] io::Error),
    #[error("artifact serialization failure: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Serialize both fitted states to disk.
///
/// Both blobs are encoded in memory before either file is written, so an
/// encoding failure cannot leave a fresh artifact beside a stale one.
pub fn save_artifacts(
    vectorizer: &TfidfVectorizer,
    classifier: &MultinomialNb,
    vectorizer_path: &Path,
    classifier_path: &Path,
) -> Result<(), ArtifactError> {
    let vectorizer_blob = serde_json::to_vec(vectorizer).map_err(ArtifactError::Serialize)?;
    let classifier_blob = serde_json::to_vec(classifier).map_err(ArtifactError::Serialize)?;
    fs::write(vectorizer_path, vectorizer_blob)?;
    fs::write(classifier_path, classifier_blob)?;
    info!(
        vectorizer = %vectorizer_path.display(),
        classifier = %classifier_path.display(),
        "artifacts persisted"
    );
    Ok(())
}

/// Load a previously persisted artifact pair, verifying that both halves
/// agree on the feature space.
pub fn load_artifacts(
    vectorizer_path: &Path,
    classifier_path: &Path,
) -> Result<(TfidfVectorizer, MultinomialNb), ArtifactError> {
    let vectorizer: TfidfVectorizer = read_artifact(vectorizer_path)?;
    let classifier: MultinomialNb = read_artifact(classifier_path)?;
    if vectorizer.vocabulary_size() != classifier.n_features() {
        return Err(ArtifactError::Mismatched {
            vocabulary: vectorizer.vocabulary_size(),
            features: classifier.n_features(),
        });
    }
    Ok((vectorizer, classifier))
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Missing(path.display().to_string()));
    }
    let bytes = fs::read(path)?;
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Corrupt {
        path: path.display().to_string(),
        source,
    })
}
