//! Prediction contract shared by every serving backend.

use thiserror::Error;

use super::{bayes::MultinomialNb, respond, vectorizer::TfidfVectorizer};
use crate::nlp;

/// One classified review.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: u8,
    /// Posterior confidence as a percentage, rounded to two decimals.
    pub confidence: f64,
    pub custom_msg: String,
}

/// Failures surfaced by a predictor.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Caller supplied empty or whitespace-only text.
    #[error("Please enter a valid review.")]
    EmptyInput,
    /// Unexpected failure inside normalize/vectorize/classify.
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Serving backends are swappable behind this contract; a heavier
/// transformer-based backend would implement the same trait.
pub trait SentimentPredictor: Send + Sync {
    /// Classify one raw review text.
    fn predict(&self, raw_text: &str) -> Result<Prediction, PredictError>;

    /// Dimensionality of the backend's feature space, for health reporting.
    fn vocabulary_size(&self) -> usize;
}

/// Naive Bayes backend over a fitted TF-IDF vectorizer. Holds only
/// immutable fitted state, so it is freely shared across requests.
pub struct NaiveBayesPredictor {
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNb,
}

impl NaiveBayesPredictor {
    pub fn new(vectorizer: TfidfVectorizer, classifier: MultinomialNb) -> Self {
        Self {
            vectorizer,
            classifier,
        }
    }
}

impl SentimentPredictor for NaiveBayesPredictor {
    fn predict(&self, raw_text: &str) -> Result<Prediction, PredictError> {
        if raw_text.trim().is_empty() {
            return Err(PredictError::EmptyInput);
        }

        let normalized = nlp::normalize(raw_text);
        let features = self.vectorizer.transform(&normalized);
        if features.len() != self.classifier.n_features() {
            return Err(PredictError::Inference(format!(
                "feature width {} does not match classifier width {}",
                features.len(),
                self.classifier.n_features()
            )));
        }

        let proba = self.classifier.predict_proba(features.view());
        let label = u8::from(proba[1] > proba[0]);
        let confidence = (proba[label as usize] * 100.0 * 100.0).round() / 100.0;
        Ok(Prediction {
            label,
            confidence,
            custom_msg: respond::custom_message(label, raw_text).to_string(),
        })
    }

    fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}
