//! Per-tenant request counter family.
//!
//! A counter family owns one monotonically increasing series per label
//! value, created lazily on first increment.

use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::RwLock;

use super::encoder::{escape_label_value, write_family_header};
use super::RegistryError;

/// A family of counter series partitioned by a single label dimension.
///
/// Series are stored in an ordered map so that rendering is deterministic.
/// All updates take the write lock, so concurrent increments to the same
/// or different series never lose an update.
#[derive(Debug)]
pub struct CounterFamily {
    name: &'static str,
    help: &'static str,
    label: &'static str,
    series: RwLock<BTreeMap<String, u64>>,
}

impl CounterFamily {
    /// Creates an empty counter family.
    #[must_use]
    pub fn new(name: &'static str, help: &'static str, label: &'static str) -> Self {
        Self {
            name,
            help,
            label,
            series: RwLock::new(BTreeMap::new()),
        }
    }

    /// Increments the series for `label_value` by one.
    ///
    /// A series that has not been seen before is initialized to zero
    /// before the increment, so its post-state is exactly 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the series lock is poisoned.
    pub fn inc(&self, label_value: &str) -> Result<(), RegistryError> {
        let mut series = self.series.write().map_err(|_| RegistryError::Lock)?;
        *series.entry(label_value.to_string()).or_insert(0) += 1;
        Ok(())
    }

    /// Returns the current value of the series for `label_value`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the series lock is poisoned.
    pub fn value(&self, label_value: &str) -> Result<Option<u64>, RegistryError> {
        let series = self.series.read().map_err(|_| RegistryError::Lock)?;
        Ok(series.get(label_value).copied())
    }

    /// Renders the family into the exposition document.
    ///
    /// Emits the `# HELP`/`# TYPE` header even when no series exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the series lock is poisoned.
    pub fn encode(&self, out: &mut String) -> Result<(), RegistryError> {
        let series = self.series.read().map_err(|_| RegistryError::Lock)?;

        write_family_header(out, self.name, self.help, "counter")?;
        for (label_value, count) in series.iter() {
            writeln!(
                out,
                "{}{{{}=\"{}\"}} {count}",
                self.name,
                self.label,
                escape_label_value(label_value)
            )?;
        }
        Ok(())
    }
}
