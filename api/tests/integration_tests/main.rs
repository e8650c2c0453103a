//! Integration tests for the MLOps metrics service.
//!
//! These tests verify the complete flow of tracking calls and metric
//! scrapes through the HTTP API.

mod metrics_tests;
mod track_tests;
