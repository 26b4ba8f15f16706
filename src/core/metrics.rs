//! Logger metrics for observability
//!
//! Counts dispatched entries and writer failures so callers running the
//! lenient dispatch policy can still see how healthy their writers are.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_log_bridge::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_dispatched();
/// metrics.record_writer_failure();
///
/// assert_eq!(metrics.entries_dispatched(), 1);
/// assert_eq!(metrics.writer_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Entries handed to the writer chain
    entries_dispatched: AtomicU64,

    /// Individual `Writer::write` calls that returned an error
    writer_failures: AtomicU64,

    /// Entries whose dispatch ended with an error
    failed_dispatches: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            entries_dispatched: AtomicU64::new(0),
            writer_failures: AtomicU64::new(0),
            failed_dispatches: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn entries_dispatched(&self) -> u64 {
        self.entries_dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn writer_failures(&self) -> u64 {
        self.writer_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_dispatches(&self) -> u64 {
        self.failed_dispatches.load(Ordering::Relaxed)
    }

    /// Record an entry entering dispatch
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.entries_dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_writer_failure(&self) -> u64 {
        self.writer_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed_dispatch(&self) -> u64 {
        self.failed_dispatches.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of dispatched entries that ended in an error (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been dispatched.
    pub fn failure_rate(&self) -> f64 {
        let total = self.entries_dispatched() as f64;
        if total == 0.0 {
            0.0
        } else {
            (self.failed_dispatches() as f64 / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.entries_dispatched.store(0, Ordering::Relaxed);
        self.writer_failures.store(0, Ordering::Relaxed);
        self.failed_dispatches.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            entries_dispatched: AtomicU64::new(self.entries_dispatched()),
            writer_failures: AtomicU64::new(self.writer_failures()),
            failed_dispatches: AtomicU64::new(self.failed_dispatches()),
        }
    }
}
