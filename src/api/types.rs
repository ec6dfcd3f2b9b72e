//! Shared DTOs for JSON requests and responses.

use serde::{Deserialize, Serialize};

/// Body of a prediction request, JSON or form encoded.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub message: String,
}

/// Successful classification of one review.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionDto {
    pub prediction: u8,
    pub confidence: f64,
    pub custom_msg: String,
}

/// Error payload returned for validation and inference failures.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Read-only service status.
#[derive(Debug, Clone, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub vocabulary_size: usize,
}
