//! Evaluation metrics for the binary classifier.

use std::cmp::Ordering;

use ndarray::{Array2, Axis};
use tracing::info;

use super::bayes::MultinomialNb;

/// Confusion counts plus derived per-class and aggregate scores.
#[derive(Debug, Clone)]
pub struct EvalReport {
    pub true_neg: usize,
    pub false_pos: usize,
    pub false_neg: usize,
    pub true_pos: usize,
    /// Per-class (precision, recall, f1, support), indexed by label.
    pub per_class: [(f64, f64, f64, usize); 2],
    pub accuracy: f64,
    pub weighted_f1: f64,
    pub roc_auc: f64,
}

impl EvalReport {
    /// Emit the report through tracing, mirroring a classification report.
    pub fn log(&self) {
        for class in 0..2 {
            let (precision, recall, f1, support) = self.per_class[class];
            info!(class, precision, recall, f1, support, "class report");
        }
        info!(
            tn = self.true_neg,
            fp = self.false_pos,
            fn_ = self.false_neg,
            tp = self.true_pos,
            "confusion matrix"
        );
        info!(
            accuracy = self.accuracy,
            weighted_f1 = self.weighted_f1,
            roc_auc = self.roc_auc,
            "held-out evaluation"
        );
    }
}

/// Score a fitted classifier on held-out features and labels.
pub fn evaluate(classifier: &MultinomialNb, x: &Array2<f64>, y: &[u8]) -> EvalReport {
    let predictions: Vec<u8> = x
        .axis_iter(Axis(0))
        .map(|row| classifier.predict(row))
        .collect();
    let scores: Vec<f64> = x
        .axis_iter(Axis(0))
        .map(|row| classifier.predict_proba(row)[1])
        .collect();

    let mut true_neg = 0;
    let mut false_pos = 0;
    let mut false_neg = 0;
    let mut true_pos = 0;
    for (&truth, &guess) in y.iter().zip(&predictions) {
        match (truth, guess) {
            (0, 0) => true_neg += 1,
            (0, _) => false_pos += 1,
            (_, 0) => false_neg += 1,
            _ => true_pos += 1,
        }
    }

    let total = y.len();
    let accuracy = if total == 0 {
        0.0
    } else {
        (true_neg + true_pos) as f64 / total as f64
    };
    let per_class = [class_scores(y, &predictions, 0), class_scores(y, &predictions, 1)];
    EvalReport {
        true_neg,
        false_pos,
        false_neg,
        true_pos,
        per_class,
        accuracy,
        weighted_f1: weighted_f1(y, &predictions),
        roc_auc: roc_auc(y, &scores),
    }
}

/// Area under the ROC curve from positive-class scores, via the
/// Mann-Whitney rank formulation with average ranks over tied scores.
///
/// A single-class evaluation set has no curve; that degenerate case scores
/// 0.5 rather than failing.
pub fn roc_auc(y_true: &[u8], scores: &[f64]) -> f64 {
    let n_pos = y_true.iter().filter(|&&label| label == 1).count();
    let n_neg = y_true.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return 0.5;
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].partial_cmp(&scores[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; scores.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && scores[order[end + 1]] == scores[order[start]] {
            end += 1;
        }
        let average_rank = (start + end) as f64 / 2.0 + 1.0;
        for &index in &order[start..=end] {
            ranks[index] = average_rank;
        }
        start = end + 1;
    }

    let positive_rank_sum: f64 = y_true
        .iter()
        .zip(&ranks)
        .filter(|(&label, _)| label == 1)
        .map(|(_, &rank)| rank)
        .sum();
    (positive_rank_sum - (n_pos * (n_pos + 1)) as f64 / 2.0) / (n_pos * n_neg) as f64
}

/// F1 per class averaged by true-label support.
pub fn weighted_f1(y_true: &[u8], y_pred: &[u8]) -> f64 {
    let total = y_true.len() as f64;
    if total == 0.0 {
        return 0.0;
    }
    let mut f1_sum = 0.0;
    for class in 0u8..2 {
        let (_, _, f1, support) = class_scores(y_true, y_pred, class);
        f1_sum += f1 * support as f64;
    }
    f1_sum / total
}

fn class_scores(y_true: &[u8], y_pred: &[u8], class: u8) -> (f64, f64, f64, usize) {
    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut missed = 0usize;
    let mut support = 0usize;
    for (&truth, &guess) in y_true.iter().zip(y_pred) {
        if truth == class {
            support += 1;
            if guess == class {
                tp += 1;
            } else {
                missed += 1;
            }
        } else if guess == class {
            fp += 1;
        }
    }
    let precision = if tp + fp == 0 {
        0.0
    } else {
        tp as f64 / (tp + fp) as f64
    };
    let recall = if tp + missed == 0 {
        0.0
    } else {
        tp as f64 / (tp + missed) as f64
    };
    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };
    (precision, recall, f1, support)
}
