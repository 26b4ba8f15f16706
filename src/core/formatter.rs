//! Formatter trait for rendering log entries

use super::log_entry::LogEntry;

/// Renders an entry to a message string
///
/// Implementations must be total: every well-formed entry renders,
/// whatever its level, message or context.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry) -> String;
    fn name(&self) -> &str;
}
