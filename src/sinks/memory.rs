//! In-memory external logger that records every call

use crate::core::{ExternalLogger, LogContext, LoggerError, Result};
use parking_lot::Mutex;

/// One call received by a [`MemoryLogger`]
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCall {
    pub level: String,
    pub message: String,
    pub context: LogContext,
}

impl LoggedCall {
    pub fn new(level: impl Into<String>, message: impl Into<String>, context: LogContext) -> Self {
        Self {
            level: level.into(),
            message: message.into(),
            context,
        }
    }
}

/// Records calls in order; can be told to fail after recording
///
/// # Example
///
/// ```
/// use rust_log_bridge::prelude::*;
///
/// let sink = MemoryLogger::new();
/// sink.log("info", "hello", &LogContext::new())?;
/// assert_eq!(sink.calls()[0].level, "info");
/// # Ok::<(), LoggerError>(())
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    calls: Mutex<Vec<LoggedCall>>,
    failure: Mutex<Option<String>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A logger whose every call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        let logger = Self::new();
        logger.fail_with(Some(message.into()));
        logger
    }

    /// Make subsequent calls fail (`Some`) or succeed (`None`)
    pub fn fail_with(&self, message: Option<String>) {
        *self.failure.lock() = message;
    }

    pub fn calls(&self) -> Vec<LoggedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl ExternalLogger for MemoryLogger {
    fn log(&self, level: &str, message: &str, context: &LogContext) -> Result<()> {
        self.calls
            .lock()
            .push(LoggedCall::new(level, message, context.clone()));

        match self.failure.lock().as_ref() {
            Some(reason) => Err(LoggerError::delegation("memory", reason.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;

    #[test]
    fn test_records_calls_in_order() {
        let sink = MemoryLogger::new();
        sink.log("alert", "first", &LogContext::new()).unwrap();
        sink.log("debug", "second", &LogContext::new().with_field("k", "v"))
            .unwrap();

        let calls = sink.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], LoggedCall::new("alert", "first", LogContext::new()));
        assert_eq!(calls[1].context.get("k"), Some(&FieldValue::from("v")));
    }

    #[test]
    fn test_failing_sink_records_then_errors() {
        let sink = MemoryLogger::failing("disk full");
        let err = sink.log("error", "x", &LogContext::new()).unwrap_err();

        assert_eq!(err.to_string(), "External logger 'memory' failed: disk full");
        assert_eq!(sink.call_count(), 1);

        sink.fail_with(None);
        assert!(sink.log("error", "y", &LogContext::new()).is_ok());
    }
}
