//! Tracking payload decoding and validation.
//!
//! A tracking call arrives as a loose JSON object. Before any metric is
//! touched, each field is classified into its accepted shapes and folded
//! into a typed [`TrackSample`]; anything else becomes an explicit
//! [`TrackValidationError`] whose `Display` string is the wire error
//! message.

use serde_json::Value;
use thiserror::Error;

/// Label value used when `business_id` is absent.
pub const DEFAULT_TENANT: &str = "unknown";

/// Sentinel latency in milliseconds used when `response_time_ms` is absent.
pub const DEFAULT_RESPONSE_TIME_MS: f64 = 1000.0;

/// Errors produced while validating a tracking payload.
///
/// `Display` values double as the `error` field of the HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrackValidationError {
    /// The payload is not a non-empty JSON object.
    #[error("no metrics")]
    NoMetrics,

    /// `business_id` is present but neither a string nor an integer.
    #[error("Invalid business_id type")]
    InvalidBusinessId,

    /// `response_time_ms` is present but not convertible to a number.
    #[error("Invalid response_time_ms type")]
    InvalidResponseTime,
}

/// A validated tracking sample, ready to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSample {
    /// Normalized tenant label (integers become their decimal form).
    pub tenant: String,
    /// Reported latency in milliseconds.
    pub response_time_ms: f64,
}

impl TrackSample {
    /// Classifies a decoded JSON payload into a validated sample.
    ///
    /// The payload must be a non-empty JSON object. `business_id` accepts
    /// strings and integers (booleans and floats are rejected) and falls
    /// back to [`DEFAULT_TENANT`]; `response_time_ms` accepts numbers and
    /// numeric strings and falls back to [`DEFAULT_RESPONSE_TIME_MS`].
    ///
    /// # Errors
    ///
    /// Returns a [`TrackValidationError`] naming the offending field, or
    /// [`TrackValidationError::NoMetrics`] for an unusable payload.
    pub fn from_json(payload: &Value) -> Result<Self, TrackValidationError> {
        let fields = match payload {
            Value::Object(fields) if !fields.is_empty() => fields,
            _ => return Err(TrackValidationError::NoMetrics),
        };

        let tenant = match fields.get("business_id") {
            None => DEFAULT_TENANT.to_string(),
            Some(value) => tenant_label(value)?,
        };

        let response_time_ms = match fields.get("response_time_ms") {
            None => DEFAULT_RESPONSE_TIME_MS,
            Some(value) => response_time(value)?,
        };

        Ok(Self {
            tenant,
            response_time_ms,
        })
    }

    /// Reported latency converted to seconds, as observed by the histogram.
    #[must_use]
    pub fn latency_seconds(&self) -> f64 {
        self.response_time_ms / 1000.0
    }
}

/// Classifies a `business_id` value into a label string.
///
/// Only strings and integers qualify; note that JSON booleans are their
/// own type here and are rejected.
fn tenant_label(value: &Value) -> Result<String, TrackValidationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        _ => Err(TrackValidationError::InvalidBusinessId),
    }
}

/// Classifies a `response_time_ms` value into milliseconds.
fn response_time(value: &Value) -> Result<f64, TrackValidationError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or(TrackValidationError::InvalidResponseTime),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| TrackValidationError::InvalidResponseTime),
        _ => Err(TrackValidationError::InvalidResponseTime),
    }
}
