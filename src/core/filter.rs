//! Filter trait for accepting or rejecting log entries

use super::log_entry::LogEntry;

pub trait Filter: Send + Sync {
    /// Decide whether `entry` continues down the writer
    fn accepts(&self, entry: &LogEntry) -> bool;
    fn name(&self) -> &str;
}
