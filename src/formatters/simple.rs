//! Template-based text formatter
//!
//! Placeholders are written `%name%`:
//!
//! | placeholder      | value                                          |
//! |------------------|------------------------------------------------|
//! | `%timestamp%`    | entry timestamp, see [`TimestampFormat`]       |
//! | `%priorityName%` | uppercase severity name, e.g. `WARNING`        |
//! | `%priority%`     | severity ordinal, `0` (emergency) to `7`       |
//! | `%message%`      | the message, unmodified                        |
//! | `%extra%`        | context as a JSON object, empty if no fields   |
//!
//! Unknown placeholders are left as written.

use crate::core::{Formatter, LogEntry, TimestampFormat};
use std::borrow::Cow;

/// Template used when none is given
pub const DEFAULT_FORMAT: &str = "%timestamp% %priorityName% (%priority%): %message% %extra%";

/// The default formatter of every writer
///
/// # Example
///
/// ```
/// use rust_log_bridge::prelude::*;
///
/// let formatter = SimpleFormatter::with_format("%priorityName%: %message% %extra%");
/// let entry = LogEntry::new(
///     Severity::Notice,
///     "user created",
///     LogContext::new().with_field("id", 7),
/// );
/// assert_eq!(formatter.format(&entry), r#"NOTICE: user created {"id":7}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleFormatter {
    format: String,
    timestamp_format: TimestampFormat,
}

impl SimpleFormatter {
    pub fn new() -> Self {
        Self::with_format(DEFAULT_FORMAT)
    }

    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn template(&self) -> &str {
        &self.format
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    fn placeholder<'e>(&self, key: &str, entry: &'e LogEntry) -> Option<Cow<'e, str>> {
        let value = match key {
            "timestamp" => Cow::Owned(self.timestamp_format.format(entry.timestamp())),
            "priorityName" => Cow::Borrowed(entry.level().to_str()),
            "priority" => Cow::Owned(entry.level().as_ordinal().to_string()),
            "message" => Cow::Borrowed(entry.message()),
            "extra" if entry.context().is_empty() => Cow::Borrowed(""),
            "extra" => Cow::Owned(entry.context().to_json()),
            _ => return None,
        };
        Some(value)
    }
}

impl Default for SimpleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for SimpleFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        let mut output = String::with_capacity(self.format.len() + entry.message().len());
        let mut rest = self.format.as_str();

        // Single pass so substituted values are never scanned for placeholders
        while let Some(start) = rest.find('%') {
            output.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            let Some(end) = after.find('%') else {
                output.push_str(&rest[start..]);
                rest = "";
                break;
            };

            match self.placeholder(&after[..end], entry) {
                Some(value) => {
                    output.push_str(&value);
                    rest = &after[end + 1..];
                }
                None => {
                    output.push('%');
                    rest = after;
                }
            }
        }
        output.push_str(rest);

        if entry.context().is_empty() && self.format.contains("%extra%") {
            let trimmed = output.trim_end_matches(' ').len();
            output.truncate(trimmed);
        }
        output
    }

    fn name(&self) -> &str {
        "simple"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogContext, Severity};
    use chrono::{TimeZone, Utc};

    fn fixed_entry(context: LogContext) -> LogEntry {
        let timestamp = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        LogEntry::at(timestamp, Severity::Error, "disk full", context)
    }

    #[test]
    fn test_default_template() {
        let formatter = SimpleFormatter::new();
        let context = LogContext::new()
            .with_field("mount", "/var")
            .with_field("free", 0);

        assert_eq!(
            formatter.format(&fixed_entry(context)),
            r#"2025-01-08T10:30:45.000Z ERROR (3): disk full {"mount":"/var","free":0}"#
        );
    }

    #[test]
    fn test_empty_extra_is_trimmed() {
        let formatter = SimpleFormatter::new();
        assert_eq!(
            formatter.format(&fixed_entry(LogContext::new())),
            "2025-01-08T10:30:45.000Z ERROR (3): disk full"
        );
    }

    #[test]
    fn test_message_is_not_rescanned() {
        let formatter = SimpleFormatter::with_format("%message%|%extra%");
        let entry = LogEntry::new(Severity::Info, "literal %extra% here", LogContext::new());
        assert_eq!(formatter.format(&entry), "literal %extra% here|");
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        let formatter = SimpleFormatter::with_format("100% %host% %priority%");
        let entry = LogEntry::new(Severity::Alert, "x", LogContext::new());
        assert_eq!(formatter.format(&entry), "100% %host% 1");
    }

    #[test]
    fn test_unterminated_placeholder() {
        let formatter = SimpleFormatter::with_format("%message% 50%");
        let entry = LogEntry::new(Severity::Debug, "done", LogContext::new());
        assert_eq!(formatter.format(&entry), "done 50%");
    }

    #[test]
    fn test_custom_timestamp_format() {
        let formatter = SimpleFormatter::with_format("[%timestamp%] %message%")
            .with_timestamp_format(TimestampFormat::Unix);
        assert_eq!(
            formatter.format(&fixed_entry(LogContext::new())),
            "[1736332245] disk full"
        );
    }

    #[test]
    fn test_every_level_renders() {
        let formatter = SimpleFormatter::with_format("%priorityName%/%priority%");
        for level in Severity::ALL {
            let entry = LogEntry::new(level, "", LogContext::new());
            assert_eq!(
                formatter.format(&entry),
                format!("{}/{}", level.to_str(), level.as_ordinal())
            );
        }
    }
}
