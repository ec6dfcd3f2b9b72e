//! HTTP layer exposing the prediction service.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    config::Settings,
    model::{
        predictor::{NaiveBayesPredictor, SentimentPredictor},
        store,
    },
};

/// Immutable per-process state handed to every request handler. Built once
/// at startup; requests only read it, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn SentimentPredictor>,
}

/// Load artifacts, build the router, and serve until shutdown.
///
/// Artifact loading happens before the listener binds: a missing or corrupt
/// artifact aborts startup instead of surfacing as a 500 on first request.
pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let (vectorizer, classifier) =
        store::load_artifacts(&settings.vectorizer_path(), &settings.classifier_path())
            .context("loading model artifacts; run `review-sense train` first")?;
    info!(
        vocabulary = vectorizer.vocabulary_size(),
        "model artifacts loaded"
    );

    let state = AppState {
        predictor: Arc::new(NaiveBayesPredictor::new(vectorizer, classifier)),
    };
    let router = router(state, &settings)?;

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving review-sense API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

/// Build the application router; separated out for in-process tests.
pub fn router(state: AppState, settings: &Settings) -> Result<Router> {
    let cors = cors_layer(&settings.allowed_origins)?;
    Ok(Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health))
        .route("/predict", post(routes::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

fn cors_layer(allowed_origins: &str) -> Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);
    if allowed_origins.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }
    let mut origins = Vec::new();
    for origin in allowed_origins.split(',') {
        let origin = origin.trim();
        if origin.is_empty() {
            continue;
        }
        origins.push(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid origin {origin:?}"))?,
        );
    }
    Ok(layer.allow_origin(origins))
}
