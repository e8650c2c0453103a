//! Integration tests for the tracking endpoint.
//!
//! Tests cover:
//! - Recording valid tracking calls
//! - Validation errors for missing or mistyped fields
//! - Malformed and absent request bodies
//! - Concurrent tracking calls

use axum::http::StatusCode;
use serde_json::json;

use super::common::{post_json, post_raw, test_app};

#[tokio::test]
async fn test_track_records_metrics() {
    let (app, state) = test_app();

    let payload = json!({"business_id": "biz1", "response_time_ms": 250});
    let (status, response) = post_json(app, "/track", payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "metrics recorded");

    assert_eq!(state.registry().request_count("biz1").unwrap(), Some(1));
    let snap = state.registry().latency_snapshot("biz1").unwrap().unwrap();
    assert_eq!(snap.count, 1);
    assert!((snap.sum - 0.25).abs() < 1e-9);
}

#[tokio::test]
async fn test_track_defaults_for_missing_fields() {
    let (app, state) = test_app();

    // Any non-empty object counts as a tracking call
    let (status, _) = post_json(app, "/track", json!({"model": "gpt"})).await;
    assert_eq!(status, StatusCode::OK);

    // Tenant falls back to "unknown", latency to the 1000 ms sentinel
    assert_eq!(state.registry().request_count("unknown").unwrap(), Some(1));
    let snap = state
        .registry()
        .latency_snapshot("unknown")
        .unwrap()
        .unwrap();
    assert!((snap.sum - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_track_empty_object_returns_no_metrics() {
    let (app, _state) = test_app();

    let (status, response) = post_json(app, "/track", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "no metrics");
}

#[tokio::test]
async fn test_track_empty_body_returns_no_metrics() {
    let (app, _state) = test_app();

    let (status, response) = post_raw(app, "/track", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "no metrics");
}

#[tokio::test]
async fn test_track_malformed_body_returns_invalid_json() {
    let (app, _state) = test_app();

    let (status, response) = post_raw(app, "/track", "this is not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "invalid JSON");
}

#[tokio::test]
async fn test_track_invalid_business_id_type() {
    let (app, state) = test_app();

    let (status, response) = post_json(app, "/track", json!({"business_id": [1, 2]})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Invalid business_id type");

    // Nothing was recorded
    assert_eq!(state.registry().request_count("unknown").unwrap(), None);
}

#[tokio::test]
async fn test_track_invalid_response_time_type() {
    let (app, _state) = test_app();

    let payload = json!({"business_id": "biz1", "response_time_ms": "fast"});
    let (status, response) = post_json(app, "/track", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "Invalid response_time_ms type");
}

#[tokio::test]
async fn test_track_integer_business_id() {
    let (app, state) = test_app();

    let (status, _) = post_json(app, "/track", json!({"business_id": 42})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.registry().request_count("42").unwrap(), Some(1));
}

#[tokio::test]
async fn test_concurrent_tracking_calls_lose_no_increment() {
    let (app, state) = test_app();
    let calls = 20;

    let handles: Vec<_> = (0..calls)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let payload = json!({"business_id": "biz1", "response_time_ms": 100});
                let (status, _) = post_json(app, "/track", payload).await;
                assert_eq!(status, StatusCode::OK);
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(state.registry().request_count("biz1").unwrap(), Some(calls));
    assert_eq!(
        state.registry().latency_snapshot("biz1").unwrap().unwrap().count,
        calls
    );
}
