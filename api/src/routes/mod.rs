//! API route definitions.
//!
//! This module organizes all HTTP routes for the MLOps metrics service.

mod health;
mod metrics;
mod track;

pub use health::health_routes;
pub use metrics::metrics_routes;
pub use track::track_routes;

use serde::{Deserialize, Serialize};

/// Wire shape of every error response: a single `error` field.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error classification.
    pub error: String,
}

impl ErrorBody {
    /// Creates an error body from any displayable error.
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
