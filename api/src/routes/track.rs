//! Tracking endpoint.
//!
//! Accepts per-request metric reports, validates them, and folds them into
//! the metrics registry.

use super::ErrorBody;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use shared::models::TrackSample;

/// Response for a successfully recorded tracking call.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrackResponse {
    /// Confirmation message.
    pub message: String,
}

/// Creates the tracking routes.
pub fn track_routes(state: AppState) -> Router {
    Router::new()
        .route("/track", post(track))
        .with_state(state)
}

/// Handler for tracking calls.
///
/// The body is read raw rather than through the `Json` extractor: an
/// absent body must map to the "no metrics" branch and a malformed body
/// to "invalid JSON", and no `Content-Type` is required. Field
/// classification lives in [`TrackSample::from_json`].
async fn track(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TrackResponse>, (StatusCode, Json<ErrorBody>)> {
    if body.is_empty() {
        return Err(bad_request("no metrics"));
    }

    let payload: serde_json::Value =
        serde_json::from_slice(&body).map_err(|_| bad_request("invalid JSON"))?;

    let sample = TrackSample::from_json(&payload).map_err(bad_request)?;

    state
        .registry()
        .record(&sample.tenant, sample.latency_seconds())
        .map_err(|e| {
            tracing::error!(error = %e, "failed to record tracking sample");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new("metrics registry unavailable")),
            )
        })?;

    Ok(Json(TrackResponse {
        message: "metrics recorded".to_string(),
    }))
}

fn bad_request(error: impl ToString) -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(error)))
}
