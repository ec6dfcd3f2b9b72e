//! Model training, persistence, and prediction layer.

pub mod bayes;
pub mod metrics;
pub mod predictor;
pub mod respond;
pub mod search;
pub mod split;
pub mod store;
pub mod vectorizer;

use std::path::Path;

use anyhow::Result;
use ndarray::Axis;
use tracing::info;

use crate::{config::Settings, data::reviews, nlp};
use bayes::MultinomialNb;
use vectorizer::TfidfVectorizer;

/// Smoothing strength used everywhere a classifier is fitted. Deliberately
/// lower than the textbook 1.0; tuned for corpora of around a thousand rows.
pub const SMOOTHING_ALPHA: f64 = 0.2;
/// Held-out share used by the vocabulary search and the evaluation report.
pub const TEST_RATIO: f64 = 0.2;
/// Seed for the reproducible train/test shuffle.
pub const SPLIT_SEED: u64 = 0;
/// Vocabulary caps trialled by the search; `None` means unbounded.
pub const VOCABULARY_CANDIDATES: &[Option<usize>] = &[
    Some(500),
    Some(1000),
    Some(1500),
    Some(2000),
    Some(2500),
    Some(3000),
    None,
];

/// Run the full offline pipeline: load, normalize, search, refit, evaluate,
/// persist. Any failure aborts before artifacts are written.
pub async fn train_pipeline(settings: &Settings, dataset: &Path) -> Result<()> {
    let records = reviews::load_dataset(dataset)?;
    let corpus = nlp::build_corpus(&records);
    let labels: Vec<u8> = records.iter().map(|r| r.liked).collect();

    let outcome = search::search_vocabulary(&corpus, &labels, VOCABULARY_CANDIDATES)?;
    info!(
        max_features = ?outcome.max_features,
        score = outcome.score,
        "vocabulary search complete"
    );

    let vectorizer = TfidfVectorizer::fit(&corpus, outcome.max_features);
    info!(vocabulary = vectorizer.vocabulary_size(), "fitted final vectorizer");
    let features = vectorizer.transform_batch(&corpus);

    // Held-out report on the same seeded split the search used.
    let (train_idx, test_idx) = split::train_test_indices(labels.len(), TEST_RATIO, SPLIT_SEED);
    let held_out = MultinomialNb::fit(
        &features.select(Axis(0), &train_idx),
        &split::gather(&labels, &train_idx),
        SMOOTHING_ALPHA,
    )?;
    let report = metrics::evaluate(
        &held_out,
        &features.select(Axis(0), &test_idx),
        &split::gather(&labels, &test_idx),
    );
    report.log();

    // The production classifier is refit over the entire corpus.
    let classifier = MultinomialNb::fit(&features, &labels, SMOOTHING_ALPHA)?;
    store::save_artifacts(
        &vectorizer,
        &classifier,
        &settings.vectorizer_path(),
        &settings.classifier_path(),
    )?;
    Ok(())
}
