//! Per-tenant metrics registry and text exposition rendering.
//!
//! The registry owns a request counter family and a latency histogram
//! family, both partitioned by the `business_id` label. It is constructed
//! once at startup and shared behind an `Arc`; there is no global
//! singleton. Interior synchronization uses lock-guarded ordered maps, so
//! concurrent updates never lose an increment and renders never observe a
//! torn write.

pub mod counter;
pub mod encoder;
pub mod histogram;

pub use counter::CounterFamily;
pub use encoder::TEXT_FORMAT_CONTENT_TYPE;
pub use histogram::{HistogramFamily, HistogramSnapshot, DEFAULT_BUCKETS};

use thiserror::Error;

/// Label dimension partitioning every metric family.
pub const TENANT_LABEL: &str = "business_id";

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A series lock was poisoned by a panicking writer.
    #[error("failed to acquire lock on metrics registry")]
    Lock,

    /// Formatting into the exposition document failed.
    #[error("failed to render exposition text")]
    Format(#[from] std::fmt::Error),
}

/// Thread-safe storage for all per-tenant request metrics.
///
/// # Example
///
/// ```
/// use shared::registry::MetricsRegistry;
///
/// let registry = MetricsRegistry::new();
/// registry.record("biz1", 0.25).unwrap();
/// assert_eq!(registry.request_count("biz1").unwrap(), Some(1));
/// ```
#[derive(Debug)]
pub struct MetricsRegistry {
    requests: CounterFamily,
    latency: HistogramFamily,
}

impl MetricsRegistry {
    /// Creates a registry with the standard request and latency families.
    #[must_use]
    pub fn new() -> Self {
        Self {
            requests: CounterFamily::new("ai_requests_total", "Total AI requests", TENANT_LABEL),
            latency: HistogramFamily::new(
                "ai_response_time_seconds",
                "AI response time in seconds",
                TENANT_LABEL,
                DEFAULT_BUCKETS,
            ),
        }
    }

    /// Records one request for `tenant` with the given latency in seconds.
    ///
    /// Increments the tenant's request counter by one and observes the
    /// latency into the tenant's histogram. Series for a first-time tenant
    /// are zero-initialized before the update.
    ///
    /// # Errors
    ///
    /// Returns an error if a series lock is poisoned.
    pub fn record(&self, tenant: &str, latency_seconds: f64) -> Result<(), RegistryError> {
        self.requests.inc(tenant)?;
        self.latency.observe(tenant, latency_seconds)?;
        tracing::debug!(tenant, latency_seconds, "recorded tracking sample");
        Ok(())
    }

    /// Renders every family into one exposition document.
    ///
    /// Rendering is idempotent and does not reset any values. Families
    /// appear in fixed order (counter, then histogram) with tenants sorted
    /// within each family.
    ///
    /// # Errors
    ///
    /// Returns an error if a series lock is poisoned or formatting fails.
    pub fn render(&self) -> Result<String, RegistryError> {
        let mut out = String::new();
        self.requests.encode(&mut out)?;
        self.latency.encode(&mut out)?;
        Ok(out)
    }

    /// Returns the request count recorded for `tenant`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the counter lock is poisoned.
    pub fn request_count(&self, tenant: &str) -> Result<Option<u64>, RegistryError> {
        self.requests.value(tenant)
    }

    /// Returns a snapshot of the latency series for `tenant`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the histogram lock is poisoned.
    pub fn latency_snapshot(&self, tenant: &str) -> Result<Option<HistogramSnapshot>, RegistryError> {
        self.latency.snapshot(tenant)
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
