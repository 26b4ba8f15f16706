//! No-op external logger

use crate::core::{ExternalLogger, LogContext, Result};

/// Discards everything; the default sink of [`AdapterWriter`](crate::writers::AdapterWriter)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullLogger;

impl ExternalLogger for NullLogger {
    fn log(&self, _level: &str, _message: &str, _context: &LogContext) -> Result<()> {
        Ok(())
    }
}
