//! Integration tests for the logger and the adapter writer
//!
//! These tests verify:
//! - Adapter construction and option handling
//! - Severity to external level name translation end to end
//! - Filter chains on the adapter
//! - Writer ordering and dispatch policies
//! - Persistent context and shutdown
//! - File output through the stream writer

use rust_log_bridge::prelude::*;
use rust_log_bridge::{context, LevelMap};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn adapter_logger(sink: Arc<MemoryLogger>) -> Logger {
    Logger::builder().writer(AdapterWriter::new(sink)).build()
}

#[test]
fn test_constructor_takes_external_logger() {
    let sink = Arc::new(MemoryLogger::new());
    let writer = AdapterWriter::new(sink);

    assert!(writer.filters().is_empty());
    assert_eq!(writer.formatter().name(), "simple");
}

#[test]
fn test_constructor_accepts_options_with_single_filter() {
    let filter = MockFilter::new();
    let writer = AdapterWriter::with_options(
        WriterOptions::new()
            .filter(filter.clone())
            .logger(Arc::new(MemoryLogger::new())),
    )
    .expect("valid options");

    assert_eq!(writer.filters().len(), 1);
    assert_eq!(writer.filters()[0].name(), "mock");

    let mut logger = Logger::new();
    logger.add_writer(Box::new(writer));
    logger.info("seen by the filter").unwrap();
    assert_eq!(filter.events().len(), 1);
}

#[test]
fn test_default_external_logger_discards() {
    let logger = Logger::builder().writer(AdapterWriter::default()).build();
    for level in Severity::ALL {
        assert!(logger.log(level, "foo", context! { "bar" => "baz" }).is_ok());
    }
}

#[test]
fn test_every_level_reaches_external_logger_with_translated_name() {
    let expected = [
        (Severity::Emergency, "emergency"),
        (Severity::Alert, "alert"),
        (Severity::Critical, "critical"),
        (Severity::Error, "error"),
        (Severity::Warning, "warning"),
        (Severity::Notice, "notice"),
        (Severity::Info, "info"),
        (Severity::Debug, "debug"),
    ];

    for (level, name) in expected {
        let sink = Arc::new(MemoryLogger::new());
        let logger = adapter_logger(Arc::clone(&sink));

        logger.log(level, "foo", context! { "bar" => "baz" }).unwrap();

        assert_eq!(
            sink.calls(),
            vec![LoggedCall::new(name, "foo", context! { "bar" => "baz" })],
            "level {:?}",
            level
        );
        assert_eq!(LevelMap::to_external_name(level), name);
    }
}

#[test]
fn test_log_by_ordinal() {
    let sink = Arc::new(MemoryLogger::new());
    let logger = adapter_logger(Arc::clone(&sink));

    logger.log_ordinal(2, "foo", LogContext::new()).unwrap();
    assert_eq!(sink.calls()[0].level, "critical");

    for bad in [-1, 8, 100] {
        let err = logger.log_ordinal(bad, "foo", LogContext::new()).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidSeverity { value } if value == bad));
    }
    assert_eq!(sink.call_count(), 1);
}

#[test]
fn test_rejecting_filter_blocks_delegation() {
    let sink = Arc::new(MemoryLogger::new());
    let writer = AdapterWriter::with_options(
        WriterOptions::new()
            .filter(MockFilter::rejecting())
            .logger(sink.clone()),
    )
    .unwrap();
    let logger = Logger::builder().writer(writer).build();

    logger.log(Severity::Emergency, "foo", LogContext::new()).unwrap();
    assert_eq!(sink.call_count(), 0);
}

#[test]
fn test_priority_shorthand_and_regex_filter() {
    let sink = Arc::new(MemoryLogger::new());
    let writer = AdapterWriter::with_options(
        WriterOptions::new()
            .priority(Severity::Warning.as_ordinal() as i64)
            .filter(RegexFilter::new("^db").unwrap())
            .logger(sink.clone()),
    )
    .unwrap();
    let logger = Logger::builder().writer(writer).build();

    logger.error("db timeout").unwrap();
    logger.error("cache miss").unwrap();
    logger.info("db reconnect").unwrap();

    let messages: Vec<String> = sink.calls().into_iter().map(|c| c.message).collect();
    assert_eq!(messages, vec!["db timeout".to_string()]);
}

#[test]
fn test_suppress_filter_toggles() {
    let sink = Arc::new(MemoryLogger::new());
    let gate = SuppressFilter::new();
    let writer = AdapterWriter::with_options(
        WriterOptions::new().filter(gate.clone()).logger(sink.clone()),
    )
    .unwrap();
    let logger = Logger::builder().writer(writer).build();

    gate.suppress(true);
    logger.notice("hidden").unwrap();
    gate.suppress(false);
    logger.notice("shown").unwrap();

    assert_eq!(sink.call_count(), 1);
    assert_eq!(sink.calls()[0].message, "shown");
}

#[test]
fn test_writers_are_called_in_registration_order() {
    let first = Arc::new(MemoryLogger::new());
    let second = Arc::new(MemoryLogger::new());
    let memory = MemoryWriter::new();

    let logger = Logger::builder()
        .writer(AdapterWriter::new(first.clone()))
        .writer(memory.clone())
        .writer(AdapterWriter::new(second.clone()))
        .build();

    logger.warning("disk 91%").unwrap();

    assert_eq!(first.call_count(), 1);
    assert_eq!(memory.len(), 1);
    assert_eq!(second.call_count(), 1);
}

#[test]
fn test_no_writers_is_an_error() {
    let logger = Logger::new();
    assert!(matches!(logger.info("lost"), Err(LoggerError::NoWriters)));
}

#[test]
fn test_fail_fast_returns_delegation_error_verbatim() {
    let failing = Arc::new(MemoryLogger::failing("socket closed"));
    let after = Arc::new(MemoryLogger::new());
    let logger = Logger::builder()
        .writer(AdapterWriter::new(failing.clone()))
        .writer(AdapterWriter::new(after.clone()))
        .build();

    let err = logger.alert("page on-call").unwrap_err();

    assert_eq!(err.to_string(), "External logger 'memory' failed: socket closed");
    assert_eq!(failing.call_count(), 1);
    assert_eq!(after.call_count(), 0);
    assert_eq!(logger.metrics().failed_dispatches(), 1);
}

#[test]
fn test_continue_policy_aggregates_failures() {
    let failing = Arc::new(MemoryLogger::failing("socket closed"));
    let after = Arc::new(MemoryLogger::new());
    let logger = Logger::builder()
        .writer(AdapterWriter::new(failing))
        .writer(AdapterWriter::new(after.clone()))
        .dispatch_policy(DispatchPolicy::Continue)
        .build();

    let err = logger.alert("page on-call").unwrap_err();

    match err {
        LoggerError::Dispatch { total, failures } => {
            assert_eq!(total, 2);
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].index, 0);
            assert_eq!(failures[0].writer, "adapter");
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(after.call_count(), 1);
}

#[test]
fn test_persistent_context_is_merged() {
    let sink = Arc::new(MemoryLogger::new());
    let logger = Logger::builder()
        .writer(AdapterWriter::new(sink.clone()))
        .context_field("service", "billing")
        .build();

    {
        let _guard = logger.with_context("request_id", "r-1");
        logger
            .log(Severity::Info, "charged", context! { "service" => "override" })
            .unwrap();
    }
    logger.info("idle").unwrap();

    let calls = sink.calls();
    assert_eq!(
        calls[0].context.get("service"),
        Some(&FieldValue::from("override"))
    );
    assert_eq!(calls[0].context.get("request_id"), Some(&FieldValue::from("r-1")));
    assert_eq!(calls[1].context.get("service"), Some(&FieldValue::from("billing")));
    assert!(!calls[1].context.contains_key("request_id"));
}

#[test]
fn test_scoped_context_shadows_persistent_field() {
    let sink = Arc::new(MemoryLogger::new());
    let logger = Logger::builder()
        .writer(AdapterWriter::new(sink.clone()))
        .context_field("service", "billing")
        .build();

    {
        let _guard = logger.with_context("service", "refunds");
        logger.info("scoped").unwrap();
    }
    logger.info("after").unwrap();

    let calls = sink.calls();
    assert_eq!(calls[0].context.get("service"), Some(&FieldValue::from("refunds")));
    assert_eq!(calls[1].context.get("service"), Some(&FieldValue::from("billing")));
}

#[test]
fn test_bridge_feeds_a_second_logger() {
    let memory = MemoryWriter::new();
    let inner = Arc::new(Logger::builder().writer(memory.clone()).build());
    let outer = Logger::builder()
        .writer(AdapterWriter::new(Arc::new(LoggerBridge::new(inner))))
        .build();

    outer.log(Severity::Notice, "forwarded", context! { "hop" => 1 }).unwrap();

    let entries = memory.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level(), Severity::Notice);
    assert_eq!(entries[0].context().get("hop"), Some(&FieldValue::from(1)));
}

#[test]
fn test_shutdown_runs_once() {
    let memory = MemoryWriter::new();
    let mut logger = Logger::builder().writer(memory.clone()).build();

    logger.shutdown().unwrap();
    logger.shutdown().unwrap();
    drop(logger);

    assert_eq!(memory.shutdown_count(), 1);
}

#[test]
fn test_stream_writer_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");

    let writer = StreamWriter::open(&log_file)
        .expect("Failed to open log file")
        .with_formatter(SimpleFormatter::with_format("%priorityName% %message% %extra%"));
    let json = StreamWriter::open(temp_dir.path().join("app.json"))
        .expect("Failed to open json file")
        .with_formatter(JsonFormatter::new());

    let logger = Logger::builder().writer(writer).writer(json).build();
    logger.error("first").unwrap();
    logger
        .log(Severity::Debug, "second", context! { "k" => "v" })
        .unwrap();
    logger.flush().expect("Failed to flush");

    let text = fs::read_to_string(&log_file).unwrap();
    assert_eq!(text, "ERROR first\nDEBUG second {\"k\":\"v\"}\n");

    let json_text = fs::read_to_string(temp_dir.path().join("app.json")).unwrap();
    let lines: Vec<serde_json::Value> = json_text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["priority"], 7);
    assert_eq!(lines[1]["context"]["k"], "v");
}
