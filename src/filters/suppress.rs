//! On/off switch filter

use crate::core::{Filter, LogEntry};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Accepts everything until suppressed
///
/// Clones share the switch, so the filter can be toggled after it has
/// been handed to a writer.
#[derive(Debug, Clone, Default)]
pub struct SuppressFilter {
    suppressed: Arc<AtomicBool>,
}

impl SuppressFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suppress(&self, suppress: bool) {
        self.suppressed.store(suppress, Ordering::Relaxed);
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed.load(Ordering::Relaxed)
    }
}

impl Filter for SuppressFilter {
    fn accepts(&self, _entry: &LogEntry) -> bool {
        !self.is_suppressed()
    }

    fn name(&self) -> &str {
        "suppress"
    }
}
