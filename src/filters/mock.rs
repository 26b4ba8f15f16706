//! Recording filter for tests

use crate::core::{Filter, LogEntry};
use parking_lot::Mutex;
use std::sync::Arc;

/// Records every entry it is asked about and returns a fixed verdict
///
/// Clones share the recorded events, so a test can keep one handle while
/// the other is owned by a writer.
#[derive(Debug, Clone)]
pub struct MockFilter {
    events: Arc<Mutex<Vec<LogEntry>>>,
    verdict: bool,
}

impl MockFilter {
    /// A mock that accepts everything
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            verdict: true,
        }
    }

    /// A mock that rejects everything
    pub fn rejecting() -> Self {
        Self {
            verdict: false,
            ..Self::new()
        }
    }

    pub fn events(&self) -> Vec<LogEntry> {
        self.events.lock().clone()
    }

    /// Whether `other` records into the same event list
    pub fn shares_events_with(&self, other: &MockFilter) -> bool {
        Arc::ptr_eq(&self.events, &other.events)
    }
}

impl Default for MockFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for MockFilter {
    fn accepts(&self, entry: &LogEntry) -> bool {
        self.events.lock().push(entry.clone());
        self.verdict
    }

    fn name(&self) -> &str {
        "mock"
    }
}
