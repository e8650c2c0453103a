//! Metrics scrape endpoint.
//!
//! Serves the registry contents in the Prometheus text exposition format.

use super::ErrorBody;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use shared::registry::TEXT_FORMAT_CONTENT_TYPE;

/// Creates the metrics scrape routes.
pub fn metrics_routes(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(scrape_metrics))
        .with_state(state)
}

/// Renders all known metric families as exposition text.
async fn scrape_metrics(
    State(state): State<AppState>,
) -> Result<Response, (StatusCode, Json<ErrorBody>)> {
    let body = state.registry().render().map_err(|e| {
        tracing::error!(error = %e, "failed to render metrics");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("metrics registry unavailable")),
        )
    })?;

    Ok(([(header::CONTENT_TYPE, TEXT_FORMAT_CONTENT_TYPE)], body).into_response())
}
