//! HTTP route handlers for Axum.

use axum::{
    async_trait,
    extract::{FromRequest, Request, State},
    http::{header, StatusCode},
    response::Html,
    Form, Json, RequestExt,
};
use tracing::{error, warn};

use crate::model::predictor::PredictError;

use super::{
    types::{ErrorBody, HealthDto, PredictRequest, PredictionDto},
    AppState,
};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

/// Minimal landing page with a review form posting to `/predict`.
pub async fn home() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Read-only status endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok",
        vocabulary_size: state.predictor.vocabulary_size(),
    })
}

/// Classify one review. Validation failures come back as 422; unexpected
/// inference failures are logged and surfaced as a generic 500 without
/// leaking internals.
pub async fn predict(
    State(state): State<AppState>,
    PredictInput(request): PredictInput,
) -> ApiResult<PredictionDto> {
    match state.predictor.predict(&request.message) {
        Ok(prediction) => Ok(Json(PredictionDto {
            prediction: prediction.label,
            confidence: prediction.confidence,
            custom_msg: prediction.custom_msg,
        })),
        Err(err @ PredictError::EmptyInput) => {
            warn!("rejected empty review submission");
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            ))
        }
        Err(PredictError::Inference(detail)) => {
            error!(%detail, "inference failure");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "An error occurred while scoring the review.".to_string(),
                }),
            ))
        }
    }
}

/// Accepts the prediction payload as either a JSON or a form body,
/// negotiated on the request content type.
pub struct PredictInput(pub PredictRequest);

#[async_trait]
impl<S> FromRequest<S> for PredictInput
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorBody>);

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        if content_type.starts_with("application/json") {
            let Json(body): Json<PredictRequest> = req.extract().await.map_err(bad_request)?;
            return Ok(Self(body));
        }
        let Form(body): Form<PredictRequest> = req.extract().await.map_err(bad_request)?;
        Ok(Self(body))
    }
}

fn bad_request<E: std::fmt::Display>(err: E) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Review Sense</title></head>
<body>
  <h1>Restaurant Review Sentiment</h1>
  <form method="post" action="/predict">
    <textarea name="message" rows="4" cols="60" placeholder="How was your meal?"></textarea>
    <br/>
    <button type="submit">Analyse</button>
  </form>
</body>
</html>
"#;
