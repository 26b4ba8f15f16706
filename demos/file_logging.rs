//! File logging example
//!
//! Demonstrates logging to the console and two files at once, one plain
//! text and one JSON lines.
//!
//! Run with: cargo run --example file_logging

use rust_log_bridge::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Log Bridge - File Logging Example ===\n");

    let mut logger = Logger::builder()
        .writer(StreamWriter::stdout())
        .writer(StreamWriter::open("application.log")?)
        .writer(StreamWriter::open("application.jsonl")?.with_formatter(JsonFormatter::new()))
        .dispatch_policy(DispatchPolicy::Continue)
        .context_field("app", "file_logging")
        .build();

    println!("1. Logging to console and files:");
    logger.info("Application started")?;
    logger.debug("Loading configuration...")?;
    logger.warning("Using default settings for some options")?;
    {
        let _guard = logger.with_context("phase", "db");
        logger.info("Connecting to database...")?;
        logger.info("Database connection established")?;
    }
    logger.error("Failed to load optional plugin")?;
    logger.info("Application initialization complete")?;

    logger.flush()?;
    logger.shutdown()?;

    println!("\n2. Written application.log and application.jsonl");
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
