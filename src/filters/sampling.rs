//! Random sampling filter for high-volume writers
//!
//! Drops a configurable share of entries while always keeping the
//! severities listed in [`SamplingConfig::always_sample`].
//!
//! # Example
//!
//! ```
//! use rust_log_bridge::prelude::*;
//!
//! // Keep 10% of routine entries, everything at Error or above
//! let filter = SamplingFilter::new(SamplingConfig::new(0.1));
//! let entry = LogEntry::new(Severity::Critical, "db down", LogContext::new());
//! assert!(filter.accepts(&entry));
//! ```

use crate::core::{FieldValue, Filter, LogEntry, Severity};
use rand::Rng;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Context key whose string value selects a per-category rate
pub const CATEGORY_FIELD: &str = "category";

/// Configuration for log sampling
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Sample rate between 0.0 and 1.0
    ///
    /// - 1.0 = keep everything
    /// - 0.1 = keep roughly 10%
    /// - 0.0 = drop everything except `always_sample` levels
    pub rate: f64,

    /// Severities that are never sampled out
    pub always_sample: Vec<Severity>,

    /// Per-category sample rates, keyed by the entry's `category` field
    pub category_rates: HashMap<String, f64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            rate: 1.0,
            always_sample: vec![
                Severity::Emergency,
                Severity::Alert,
                Severity::Critical,
                Severity::Error,
            ],
            category_rates: HashMap::new(),
        }
    }
}

impl SamplingConfig {
    /// Create a config with `rate`, clamped to 0.0..=1.0
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_always_sample(mut self, levels: Vec<Severity>) -> Self {
        self.always_sample = levels;
        self
    }

    #[must_use]
    pub fn with_category_rate(mut self, category: impl Into<String>, rate: f64) -> Self {
        self.category_rates.insert(category.into(), rate.clamp(0.0, 1.0));
        self
    }
}

/// Counters kept by a [`SamplingFilter`]
#[derive(Debug, Default)]
pub struct SamplerMetrics {
    sampled_count: AtomicU64,
    dropped_count: AtomicU64,
}

impl SamplerMetrics {
    pub const fn new() -> Self {
        Self {
            sampled_count: AtomicU64::new(0),
            dropped_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn sampled_count(&self) -> u64 {
        self.sampled_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn total_count(&self) -> u64 {
        self.sampled_count() + self.dropped_count()
    }

    /// Share of entries that were kept; 1.0 before any entry is seen
    pub fn effective_sample_rate(&self) -> f64 {
        let total = self.total_count() as f64;
        if total == 0.0 {
            1.0
        } else {
            self.sampled_count() as f64 / total
        }
    }

    pub fn reset(&self) {
        self.sampled_count.store(0, Ordering::Relaxed);
        self.dropped_count.store(0, Ordering::Relaxed);
    }

    fn record(&self, sampled: bool) -> bool {
        if sampled {
            self.sampled_count.fetch_add(1, Ordering::Relaxed);
        } else {
            self.dropped_count.fetch_add(1, Ordering::Relaxed);
        }
        sampled
    }
}

/// Filter that keeps a random share of entries
///
/// Clones share their metrics.
#[derive(Debug, Clone)]
pub struct SamplingFilter {
    config: SamplingConfig,
    metrics: Arc<SamplerMetrics>,
}

impl SamplingFilter {
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            config,
            metrics: Arc::new(SamplerMetrics::new()),
        }
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    pub fn metrics(&self) -> &SamplerMetrics {
        &self.metrics
    }

    fn effective_rate(&self, entry: &LogEntry) -> f64 {
        if let Some(FieldValue::String(category)) = entry.context().get(CATEGORY_FIELD) {
            if let Some(&rate) = self.config.category_rates.get(category) {
                return rate;
            }
        }
        self.config.rate
    }
}

impl Filter for SamplingFilter {
    fn accepts(&self, entry: &LogEntry) -> bool {
        if self.config.always_sample.contains(&entry.level()) {
            return self.metrics.record(true);
        }

        let rate = self.effective_rate(entry);
        let sampled = if rate >= 1.0 {
            true
        } else if rate <= 0.0 {
            false
        } else {
            rand::thread_rng().gen::<f64>() < rate
        };
        self.metrics.record(sampled)
    }

    fn name(&self) -> &str {
        "sampling"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogContext;

    fn entry(level: Severity) -> LogEntry {
        LogEntry::new(level, "msg", LogContext::new())
    }

    #[test]
    fn test_sampling_config_new_clamps() {
        assert_eq!(SamplingConfig::new(0.5).rate, 0.5);
        assert_eq!(SamplingConfig::new(1.5).rate, 1.0);
        assert_eq!(SamplingConfig::new(-0.5).rate, 0.0);
    }

    #[test]
    fn test_always_sample_levels_survive_zero_rate() {
        let filter = SamplingFilter::new(SamplingConfig::new(0.0));

        assert!(filter.accepts(&entry(Severity::Emergency)));
        assert!(filter.accepts(&entry(Severity::Error)));
        for _ in 0..10 {
            assert!(!filter.accepts(&entry(Severity::Warning)));
            assert!(!filter.accepts(&entry(Severity::Debug)));
        }
        assert_eq!(filter.metrics().sampled_count(), 2);
        assert_eq!(filter.metrics().dropped_count(), 20);
    }

    #[test]
    fn test_category_rate() {
        let filter =
            SamplingFilter::new(SamplingConfig::new(1.0).with_category_rate("noisy", 0.0));

        assert!(filter.accepts(&entry(Severity::Info)));

        let noisy = LogEntry::new(
            Severity::Info,
            "tick",
            LogContext::new().with_field(CATEGORY_FIELD, "noisy"),
        );
        for _ in 0..10 {
            assert!(!filter.accepts(&noisy));
        }
    }

    #[test]
    fn test_statistical_rate() {
        let filter = SamplingFilter::new(SamplingConfig::new(0.5));
        let total = 10_000;
        let sampled = (0..total)
            .filter(|_| filter.accepts(&entry(Severity::Info)))
            .count();

        let rate = sampled as f64 / total as f64;
        assert!(
            (0.45..=0.55).contains(&rate),
            "Expected ~50% sample rate, got {}%",
            rate * 100.0
        );
        assert_eq!(filter.metrics().total_count(), total as u64);
    }

    #[test]
    fn test_clones_share_metrics() {
        let filter = SamplingFilter::new(SamplingConfig::default());
        let handle = filter.clone();
        filter.accepts(&entry(Severity::Info));
        assert_eq!(handle.metrics().sampled_count(), 1);
        assert_eq!(handle.metrics().effective_sample_rate(), 1.0);
    }
}
