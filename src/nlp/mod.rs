//! Text preprocessing layer shared by training and serving.

pub mod lemma;
pub mod normalize;
pub mod stopwords;

pub use normalize::normalize;

use tracing::info;

use crate::data::reviews::ReviewRecord;

/// Normalize every review, keeping 1:1 index alignment with the records.
pub fn build_corpus(records: &[ReviewRecord]) -> Vec<String> {
    let corpus: Vec<String> = records.iter().map(|r| normalize(&r.text)).collect();
    info!(count = corpus.len(), "corpus normalized");
    corpus
}
