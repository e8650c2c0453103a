//! Application state module.
//!
//! Defines the shared application state that is passed to route handlers.

use shared::registry::MetricsRegistry;
use std::sync::Arc;

/// Application state shared across all request handlers.
///
/// The metrics registry is the only shared mutable resource of the
/// service. It is constructed once here and injected into the routers,
/// never reached through a global.
#[derive(Clone)]
pub struct AppState {
    /// The per-tenant metrics registry.
    registry: Arc<MetricsRegistry>,
}

impl AppState {
    /// Creates a new application state with a fresh registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Arc::new(MetricsRegistry::new()),
        }
    }

    /// Creates a new application state around an existing registry.
    #[must_use]
    pub fn with_registry(registry: Arc<MetricsRegistry>) -> Self {
        Self { registry }
    }

    /// Returns a reference to the metrics registry.
    #[must_use]
    pub fn registry(&self) -> &MetricsRegistry {
        &self.registry
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
