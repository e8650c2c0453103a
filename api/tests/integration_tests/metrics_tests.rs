//! Integration tests for the metrics scrape endpoint.
//!
//! Tests cover:
//! - The exposition content type and family headers
//! - Counter and histogram lines after tracking calls
//! - Scrape idempotency

use axum::http::StatusCode;
use serde_json::json;

use super::common::{get_text, post_json, test_app};

#[tokio::test]
async fn test_scrape_empty_registry() {
    let (app, _state) = test_app();

    let (status, content_type, text) = get_text(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "text/plain; version=0.0.4; charset=utf-8");

    // Families are declared even before any tracking call
    assert!(text.contains("# HELP ai_requests_total Total AI requests"));
    assert!(text.contains("# TYPE ai_requests_total counter"));
    assert!(text.contains("# HELP ai_response_time_seconds AI response time in seconds"));
    assert!(text.contains("# TYPE ai_response_time_seconds histogram"));
}

#[tokio::test]
async fn test_scrape_after_tracking_call() {
    let (app, _state) = test_app();

    let payload = json!({"business_id": "biz1", "response_time_ms": 250});
    let (status, _) = post_json(app.clone(), "/track", payload).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _content_type, text) = get_text(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);

    assert!(text.contains("ai_requests_total{business_id=\"biz1\"} 1"));
    assert!(text.contains("ai_response_time_seconds_bucket{business_id=\"biz1\",le=\"0.25\"} 1"));
    assert!(text.contains("ai_response_time_seconds_bucket{business_id=\"biz1\",le=\"+Inf\"} 1"));
    assert!(text.contains("ai_response_time_seconds_sum{business_id=\"biz1\"} 0.25"));
    assert!(text.contains("ai_response_time_seconds_count{business_id=\"biz1\"} 1"));
}

#[tokio::test]
async fn test_scrape_lists_every_tenant_with_exact_counts() {
    let (app, _state) = test_app();

    for _ in 0..3 {
        let payload = json!({"business_id": "biz1", "response_time_ms": 100});
        post_json(app.clone(), "/track", payload).await;
    }
    let payload = json!({"business_id": "biz2", "response_time_ms": 100});
    post_json(app.clone(), "/track", payload).await;

    let (_, _, text) = get_text(app, "/metrics").await;
    assert!(text.contains("ai_requests_total{business_id=\"biz1\"} 3"));
    assert!(text.contains("ai_requests_total{business_id=\"biz2\"} 1"));
}

#[tokio::test]
async fn test_scrape_does_not_reset_values() {
    let (app, _state) = test_app();

    let payload = json!({"business_id": "biz1", "response_time_ms": 100});
    post_json(app.clone(), "/track", payload).await;

    let (_, _, first) = get_text(app.clone(), "/metrics").await;
    let (_, _, second) = get_text(app, "/metrics").await;
    assert_eq!(first, second);
}
