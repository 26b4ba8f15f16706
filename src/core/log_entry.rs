//! Log entry structure

use super::log_context::LogContext;
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single log record
///
/// Entries are immutable once built; writers only ever see `&LogEntry`.
/// The message is stored exactly as the caller passed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    timestamp: DateTime<Utc>,
    level: Severity,
    message: String,
    context: LogContext,
}

impl LogEntry {
    pub fn new(level: Severity, message: impl Into<String>, context: LogContext) -> Self {
        Self::at(Utc::now(), level, message, context)
    }

    /// Build an entry with an explicit timestamp
    pub fn at(
        timestamp: DateTime<Utc>,
        level: Severity,
        message: impl Into<String>,
        context: LogContext,
    ) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
            context,
        }
    }

    #[inline]
    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    #[inline]
    pub fn level(&self) -> Severity {
        self.level
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn context(&self) -> &LogContext {
        &self.context
    }
}
