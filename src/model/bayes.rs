//! Multinomial Naive Bayes over the binary labels {0, 1}.

use anyhow::{ensure, Result};
use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

/// Fitted classifier state: class log-priors and per-feature conditional
/// log-probabilities. Immutable after fitting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    class_log_prior: [f64; 2],
    feature_log_prob: [Vec<f64>; 2],
    alpha: f64,
}

impl MultinomialNb {
    /// Estimate priors and conditional probabilities from a feature matrix
    /// and aligned binary labels, with Laplace-style smoothing `alpha`.
    pub fn fit(x: &Array2<f64>, y: &[u8], alpha: f64) -> Result<Self> {
        ensure!(
            x.nrows() == y.len(),
            "feature rows ({}) and labels ({}) are misaligned",
            x.nrows(),
            y.len()
        );
        ensure!(!y.is_empty(), "cannot fit on an empty training set");
        ensure!(alpha > 0.0, "smoothing strength must be positive");

        let n_features = x.ncols();
        let mut class_count = [0f64; 2];
        let mut feature_count = [vec![0f64; n_features], vec![0f64; n_features]];
        for (row, &label) in x.axis_iter(Axis(0)).zip(y.iter()) {
            ensure!(label <= 1, "labels must be 0 or 1, got {label}");
            let class = label as usize;
            class_count[class] += 1.0;
            for (j, &value) in row.iter().enumerate() {
                feature_count[class][j] += value;
            }
        }

        let total = y.len() as f64;
        let class_log_prior = [
            (class_count[0] / total).ln(),
            (class_count[1] / total).ln(),
        ];
        let mut feature_log_prob = [vec![0f64; n_features], vec![0f64; n_features]];
        for class in 0..2 {
            let smoothed_total: f64 =
                feature_count[class].iter().sum::<f64>() + alpha * n_features as f64;
            for j in 0..n_features {
                feature_log_prob[class][j] =
                    ((feature_count[class][j] + alpha) / smoothed_total).ln();
            }
        }

        Ok(Self {
            class_log_prior,
            feature_log_prob,
            alpha,
        })
    }

    /// Width of the feature space this classifier was trained on.
    pub fn n_features(&self) -> usize {
        self.feature_log_prob[0].len()
    }

    /// Smoothing strength the classifier was fitted with.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Posterior distribution over {0, 1}, normalized to sum to 1.
    ///
    /// Scores accumulate in log space and only the final normalization
    /// exponentiates, via log-sum-exp, so large vocabularies cannot
    /// underflow. The caller must pass a vector of width `n_features`.
    pub fn predict_proba(&self, features: ArrayView1<'_, f64>) -> [f64; 2] {
        let mut joint = self.class_log_prior;
        for (j, &value) in features.iter().enumerate() {
            if value == 0.0 {
                continue;
            }
            joint[0] += value * self.feature_log_prob[0][j];
            joint[1] += value * self.feature_log_prob[1][j];
        }
        let max = joint[0].max(joint[1]);
        let exp0 = (joint[0] - max).exp();
        let exp1 = (joint[1] - max).exp();
        let denom = exp0 + exp1;
        [exp0 / denom, exp1 / denom]
    }

    /// Higher-posterior label; ties resolve to label 0.
    pub fn predict(&self, features: ArrayView1<'_, f64>) -> u8 {
        let proba = self.predict_proba(features);
        u8::from(proba[1] > proba[0])
    }
}
