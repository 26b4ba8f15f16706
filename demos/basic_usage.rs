//! Basic logger usage example
//!
//! Demonstrates logging to stdout at each severity, with a priority filter
//! and structured context.
//!
//! Run with: cargo run --example basic_usage

use rust_log_bridge::prelude::*;
use rust_log_bridge::{info, warning};

fn main() -> Result<()> {
    println!("=== Rust Log Bridge - Basic Usage Example ===\n");

    let mut logger = Logger::new();
    logger.add_writer(Box::new(StreamWriter::stdout().with_colors(true)));

    println!("1. Logging at every severity:");
    logger.emergency("This is an emergency message")?;
    logger.alert("This is an alert message")?;
    logger.critical("This is a critical message")?;
    logger.error("This is an error message")?;
    logger.warning("This is a warning message")?;
    logger.notice("This is a notice message")?;
    logger.info("This is an info message")?;
    logger.debug("This is a debug message")?;

    println!("\n2. Structured context and macros:");
    logger.log(
        Severity::Notice,
        "User signed in",
        context! { "user" => "alice", "method" => "sso" },
    )?;
    let port = 8080;
    info!(logger, "Server listening on port {}", port)?;

    println!("\n3. Writer with a priority filter (WARNING and above):");
    let filtered = StreamWriter::with_options(
        std::io::stdout(),
        WriterOptions::new().filter(PriorityFilter::new(Severity::Warning)),
    )?;
    let logger = Logger::builder().writer(filtered).build();
    logger.info("Info message (hidden)")?;
    warning!(logger, "Warning message (visible)")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
