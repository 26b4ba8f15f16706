//! Adapter writer example
//!
//! Forwards entries to an external logger. Here the external logger is a
//! small type that prints PSR-3 style lines, next to a recording sink with
//! a priority filter.
//!
//! Run with: cargo run --example adapter_writer

use rust_log_bridge::prelude::*;
use std::sync::Arc;

/// Prints `level: message {context}`
struct PrintLogger;

impl ExternalLogger for PrintLogger {
    fn log(&self, level: &str, message: &str, context: &LogContext) -> Result<()> {
        if context.is_empty() {
            println!("{}: {}", level, message);
        } else {
            println!("{}: {} {}", level, message, context.to_json());
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Rust Log Bridge - Adapter Writer Example ===\n");

    let recorder = Arc::new(MemoryLogger::new());
    let logger = Logger::builder()
        .writer(AdapterWriter::new(Arc::new(PrintLogger)))
        .writer(AdapterWriter::with_options(
            WriterOptions::new()
                .priority(Severity::Error.as_ordinal() as i64)
                .logger(recorder.clone()),
        )?)
        .build();

    println!("1. Every severity, translated:");
    for level in Severity::ALL {
        logger.log(level, "foo", context! { "bar" => "baz" })?;
    }

    println!("\n2. Recorded by the filtered sink:");
    for call in recorder.calls() {
        println!("   {} -> {}", call.level, call.message);
    }

    println!("\n3. Default writer discards into a null logger:");
    let quiet = Logger::builder().writer(AdapterWriter::default()).build();
    quiet.critical("nobody hears this")?;
    println!("   ok");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
