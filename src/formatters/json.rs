//! JSON formatter for structured output

use crate::core::{Formatter, LogContext, LogEntry, TimestampFormat};
use serde::Serialize;

#[derive(Serialize)]
struct JsonRecord<'a> {
    timestamp: serde_json::Value,
    level: &'static str,
    priority: u8,
    message: &'a str,
    context: &'a LogContext,
}

/// Renders each entry as a single-line JSON object
///
/// Context keys keep their insertion order. Numeric timestamp formats are
/// emitted as JSON numbers, everything else as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonFormatter {
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn timestamp_value(&self, entry: &LogEntry) -> serde_json::Value {
        let ts = entry.timestamp();
        match self.timestamp_format {
            TimestampFormat::Unix => ts.timestamp().into(),
            TimestampFormat::UnixMillis => ts.timestamp_millis().into(),
            TimestampFormat::UnixMicros => ts.timestamp_micros().into(),
            _ => serde_json::Value::String(self.timestamp_format.format(ts)),
        }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &LogEntry) -> String {
        let record = JsonRecord {
            timestamp: self.timestamp_value(entry),
            level: entry.level().to_str(),
            priority: entry.level().as_ordinal(),
            message: entry.message(),
            context: entry.context(),
        };
        serde_json::to_string(&record).unwrap_or_default()
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_json_shape() {
        let entry = LogEntry::new(
            Severity::Warning,
            "Request slow",
            LogContext::new()
                .with_field("request_id", "abc-123")
                .with_field("latency_ms", 420),
        );
        let result = JsonFormatter::new().format(&entry);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed["level"], "WARNING");
        assert_eq!(parsed["priority"], 4);
        assert_eq!(parsed["message"], "Request slow");
        assert_eq!(parsed["context"]["request_id"], "abc-123");
        assert_eq!(parsed["context"]["latency_ms"], 420);
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_exact_output_keeps_context_order() {
        let timestamp = Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        let entry = LogEntry::at(
            timestamp,
            Severity::Emergency,
            "down",
            LogContext::new().with_field("z", 1).with_field("a", true),
        );
        let formatter = JsonFormatter::new().with_timestamp_format(TimestampFormat::Unix);

        assert_eq!(
            formatter.format(&entry),
            r#"{"timestamp":1736332245,"level":"EMERGENCY","priority":0,"message":"down","context":{"z":1,"a":true}}"#
        );
    }

    #[test]
    fn test_non_finite_floats_still_render() {
        let entry = LogEntry::new(
            Severity::Debug,
            "ratio",
            LogContext::new().with_field("value", f64::NAN),
        );
        let result = JsonFormatter::new().format(&entry);
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert!(parsed["context"]["value"].is_null());
    }
}
