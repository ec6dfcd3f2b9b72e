//! Vocabulary-size search over TF-IDF / Naive Bayes candidates.

use anyhow::{anyhow, ensure, Result};
use ndarray::Axis;
use tracing::info;

use super::{
    bayes::MultinomialNb, metrics, split, vectorizer::TfidfVectorizer, SMOOTHING_ALPHA,
    SPLIT_SEED, TEST_RATIO,
};

/// Winning vocabulary cap and its held-out score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub max_features: Option<usize>,
    pub score: f64,
}

/// Trial each vocabulary cap independently and keep the strictly best
/// weighted F1. A tie keeps the earliest candidate in list order, so the
/// candidate ordering is part of the contract.
pub fn search_vocabulary(
    corpus: &[String],
    labels: &[u8],
    candidates: &[Option<usize>],
) -> Result<SearchOutcome> {
    ensure!(!candidates.is_empty(), "candidate list is empty");
    ensure!(
        corpus.len() == labels.len(),
        "corpus ({}) and labels ({}) are misaligned",
        corpus.len(),
        labels.len()
    );

    let mut best: Option<SearchOutcome> = None;
    for &cap in candidates {
        let score = score_candidate(corpus, labels, cap)?;
        info!(max_features = ?cap, score, "scored vocabulary candidate");
        if best.map_or(true, |current| score > current.score) {
            best = Some(SearchOutcome {
                max_features: cap,
                score,
            });
        }
    }
    best.ok_or_else(|| anyhow!("no vocabulary candidate could be scored"))
}

/// Fit a fresh vectorizer/classifier pair for one cap and score it on the
/// seeded held-out split.
fn score_candidate(corpus: &[String], labels: &[u8], cap: Option<usize>) -> Result<f64> {
    let vectorizer = TfidfVectorizer::fit(corpus, cap);
    let features = vectorizer.transform_batch(corpus);

    let (train_idx, test_idx) = split::train_test_indices(labels.len(), TEST_RATIO, SPLIT_SEED);
    let x_train = features.select(Axis(0), &train_idx);
    let x_test = features.select(Axis(0), &test_idx);
    let y_train = split::gather(labels, &train_idx);
    let y_test = split::gather(labels, &test_idx);

    let classifier = MultinomialNb::fit(&x_train, &y_train, SMOOTHING_ALPHA)?;
    let predictions: Vec<u8> = x_test
        .axis_iter(Axis(0))
        .map(|row| classifier.predict(row))
        .collect();
    Ok(metrics::weighted_f1(&y_test, &predictions))
}
