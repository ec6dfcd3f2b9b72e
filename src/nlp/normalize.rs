//! Deterministic review text normalization.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{lemma, stopwords};

static NON_LETTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z]+").expect("valid regex"));

/// Map raw review text to a cleaned token sequence.
///
/// Every character outside `[A-Za-z]` becomes a space, the rest is
/// lowercased, split on whitespace, filtered against the stopword set,
/// lemmatized, and rejoined with single spaces. Lemmas that collapse into a
/// stopword are dropped as well, so `normalize(normalize(x)) == normalize(x)`
/// holds for every input. Fully stripped input yields an empty string.
pub fn normalize(raw: &str) -> String {
    let letters_only = NON_LETTERS.replace_all(raw, " ");
    let lowered = letters_only.to_lowercase();

    let mut kept = Vec::new();
    for token in lowered.split_whitespace() {
        if stopwords::is_stopword(token) {
            continue;
        }
        let base = lemma::lemmatize(token);
        if stopwords::is_stopword(&base) {
            continue;
        }
        kept.push(base);
    }
    kept.join(" ")
}
