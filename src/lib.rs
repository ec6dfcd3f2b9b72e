//! Restaurant review sentiment analyser: an offline TF-IDF / Naive Bayes
//! training pipeline plus an Axum serving layer over the fitted artifacts.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod model;
pub mod nlp;
