//! Data models for the MLOps metrics service.
//!
//! This module contains the typed representation of tracking payloads.

pub mod track;

pub use track::{TrackSample, TrackValidationError, DEFAULT_RESPONSE_TIME_MS, DEFAULT_TENANT};
