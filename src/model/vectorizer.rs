//! TF-IDF vectorization with a configurable vocabulary cap.

use std::collections::{HashMap, HashSet};

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

/// Fitted TF-IDF state: term-to-index mapping plus smoothed IDF weights.
///
/// Immutable after fitting; training and serving must share the same state,
/// since a classifier is only valid against the feature space it was
/// trained on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit over an ordered corpus of normalized documents.
    ///
    /// When `max_features` is set, the surviving terms are the most frequent
    /// across the corpus, ties broken alphabetically. Feature indices are
    /// assigned in sorted term order, so refitting the same corpus with the
    /// same cap reproduces the state exactly.
    pub fn fit(corpus: &[String], max_features: Option<usize>) -> Self {
        let n_docs = corpus.len();
        let mut term_counts: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in corpus {
            let mut seen = HashSet::new();
            for term in tokenize(doc) {
                *term_counts.entry(term).or_insert(0) += 1;
                if seen.insert(term) {
                    *doc_freq.entry(term).or_insert(0) += 1;
                }
            }
        }

        let mut ranked: Vec<(&str, usize)> = term_counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        if let Some(cap) = max_features {
            ranked.truncate(cap);
        }

        let mut terms: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort_unstable();

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (index, term) in terms.into_iter().enumerate() {
            let df = doc_freq[term] as f64;
            idf.push(((1.0 + n_docs as f64) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term.to_string(), index);
        }
        Self { vocabulary, idf }
    }

    /// Number of terms in the fitted feature space.
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Vectorize one normalized document into an L2-normalized dense row.
    ///
    /// Terms unseen during fitting contribute zero; a document with no known
    /// terms stays an all-zero vector.
    pub fn transform(&self, doc: &str) -> Array1<f64> {
        let mut row: Array1<f64> = Array1::zeros(self.idf.len());
        for term in tokenize(doc) {
            if let Some(&index) = self.vocabulary.get(term) {
                row[index] += self.idf[index];
            }
        }
        let norm = row.dot(&row).sqrt();
        if norm > 0.0 {
            row.mapv_inplace(|value| value / norm);
        }
        row
    }

    /// Vectorize a batch into a dense document-by-term matrix.
    pub fn transform_batch(&self, corpus: &[String]) -> Array2<f64> {
        let mut matrix = Array2::zeros((corpus.len(), self.idf.len()));
        for (i, doc) in corpus.iter().enumerate() {
            matrix.row_mut(i).assign(&self.transform(doc));
        }
        matrix
    }
}

/// Terms are whitespace-split tokens of at least two letters.
fn tokenize(doc: &str) -> impl Iterator<Item = &str> {
    doc.split_whitespace().filter(|token| token.len() >= 2)
}
