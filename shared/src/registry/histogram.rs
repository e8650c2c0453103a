//! Per-tenant latency histogram family.
//!
//! Each series records observations into fixed buckets plus a running sum
//! and count. Bucket bounds are set at construction and never change.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::RwLock;

use super::encoder::{escape_label_value, format_value, write_family_header};
use super::RegistryError;

/// Default bucket upper bounds in seconds (the Prometheus defaults).
pub const DEFAULT_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// A snapshot of one histogram series, taken under the read lock.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSnapshot {
    /// Per-bucket hit counts, one slot per finite bound plus an overflow
    /// slot for observations above the largest bound. Not cumulative.
    pub bucket_hits: Vec<u64>,
    /// Sum of all observed values.
    pub sum: f64,
    /// Total number of observations.
    pub count: u64,
}

/// Mutable state of one series. `bucket_hits` holds non-cumulative slot
/// counts; the cumulative view required by the exposition format is
/// computed at render time.
#[derive(Debug)]
struct HistogramSeries {
    bucket_hits: Vec<u64>,
    sum: f64,
    count: u64,
}

impl HistogramSeries {
    fn zeroed(slots: usize) -> Self {
        Self {
            bucket_hits: vec![0; slots],
            sum: 0.0,
            count: 0,
        }
    }
}

/// A family of histogram series partitioned by a single label dimension.
///
/// Invariant: for every series, the sum of `bucket_hits` (overflow slot
/// included) equals `count`.
#[derive(Debug)]
pub struct HistogramFamily {
    name: &'static str,
    help: &'static str,
    label: &'static str,
    bounds: Vec<f64>,
    series: RwLock<BTreeMap<String, HistogramSeries>>,
}

impl HistogramFamily {
    /// Creates an empty histogram family with the given bucket bounds.
    ///
    /// Bounds must be finite and sorted ascending.
    #[must_use]
    pub fn new(
        name: &'static str,
        help: &'static str,
        label: &'static str,
        bounds: &[f64],
    ) -> Self {
        debug_assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(bounds.iter().all(|b| b.is_finite()));

        Self {
            name,
            help,
            label,
            bounds: bounds.to_vec(),
            series: RwLock::new(BTreeMap::new()),
        }
    }

    /// Records an observation into the series for `label_value`.
    ///
    /// The observation lands in the first bucket whose upper bound is
    /// greater than or equal to the value, or in the overflow slot when
    /// it exceeds every bound. A series that has not been seen before is
    /// zero-initialized first.
    ///
    /// # Errors
    ///
    /// Returns an error if the series lock is poisoned.
    pub fn observe(&self, label_value: &str, value: f64) -> Result<(), RegistryError> {
        let slots = self.bounds.len() + 1;
        let slot = self.bounds.partition_point(|bound| *bound < value);

        let mut series = self.series.write().map_err(|_| RegistryError::Lock)?;
        let entry = series
            .entry(label_value.to_string())
            .or_insert_with(|| HistogramSeries::zeroed(slots));

        entry.bucket_hits[slot] += 1;
        entry.sum += value;
        entry.count += 1;
        Ok(())
    }

    /// Returns a snapshot of the series for `label_value`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the series lock is poisoned.
    pub fn snapshot(&self, label_value: &str) -> Result<Option<HistogramSnapshot>, RegistryError> {
        let series = self.series.read().map_err(|_| RegistryError::Lock)?;
        Ok(series.get(label_value).map(|s| HistogramSnapshot {
            bucket_hits: s.bucket_hits.clone(),
            sum: s.sum,
            count: s.count,
        }))
    }

    /// Renders the family into the exposition document.
    ///
    /// Bucket lines are cumulative and terminated by a `+Inf` bucket equal
    /// to `_count`, followed by the `_sum` and `_count` lines per series.
    ///
    /// # Errors
    ///
    /// Returns an error if the series lock is poisoned.
    pub fn encode(&self, out: &mut String) -> Result<(), RegistryError> {
        let series = self.series.read().map_err(|_| RegistryError::Lock)?;

        write_family_header(out, self.name, self.help, "histogram")?;
        for (label_value, s) in series.iter() {
            let label_value = escape_label_value(label_value);

            let mut cumulative = 0u64;
            for (bound, hits) in self.bounds.iter().zip(&s.bucket_hits) {
                cumulative += hits;
                writeln!(
                    out,
                    "{}_bucket{{{}=\"{label_value}\",le=\"{}\"}} {cumulative}",
                    self.name,
                    self.label,
                    format_value(*bound)
                )?;
            }
            writeln!(
                out,
                "{}_bucket{{{}=\"{label_value}\",le=\"+Inf\"}} {}",
                self.name, self.label, s.count
            )?;
            writeln!(
                out,
                "{}_sum{{{}=\"{label_value}\"}} {}",
                self.name,
                self.label,
                format_value(s.sum)
            )?;
            writeln!(
                out,
                "{}_count{{{}=\"{label_value}\"}} {}",
                self.name, self.label, s.count
            )?;
        }
        Ok(())
    }
}
