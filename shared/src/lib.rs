//! MLOps Service Shared Library
//!
//! This crate contains the domain types and the metrics registry used by
//! the MLOps metrics service.
//!
//! # Modules
//!
//! - [`models`] - Typed decoding and validation of tracking payloads
//! - [`registry`] - Per-tenant counters, latency histograms, and the
//!   Prometheus text exposition encoder
//!
//! # Example
//!
//! ```
//! use shared::registry::MetricsRegistry;
//!
//! let registry = MetricsRegistry::new();
//! registry.record("biz1", 0.25).unwrap();
//!
//! let text = registry.render().unwrap();
//! assert!(text.contains("ai_requests_total{business_id=\"biz1\"} 1"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod models;
pub mod registry;

/// Re-export common dependencies for convenience.
pub use serde;
pub use serde_json;
