//! File logging example
//!
//! Demonstrates a console sink and a file sink with independent thresholds.
//!
//! Run with: cargo run --example file_logging

use dual_sink_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Dual Sink Logger - File Logging Example ===\n");

    // Only errors on the console, everything from debug up in the file
    let logger = Logger::builder()
        .level("error")
        .file_level("debug")
        .log_file("application.log")
        .build()?;

    println!("1. Console shows errors, application.log gets everything:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.warn("Using default settings for some options");
    logger.info("Connecting to database...");
    logger.error("Failed to load optional plugin");
    logger.info("Application initialization complete");

    logger.flush()?;

    println!("\n2. The same setup from JSON:");
    let config = LoggerConfig::from_json_str(
        r#"{
            "level": "warn",
            "logFileLevel": "info",
            "logFile": "application.log",
            "timestamp": "iso8601"
        }"#,
    )?;
    let configured = Logger::from_config(&config)?;
    configured.info("Only in the file, with a timestamp");
    configured.warn("On the console and in the file");
    configured.flush()?;

    let metrics = configured.metrics();
    println!(
        "   console lines: {}, file lines: {}, filtered: {}",
        metrics.console_lines(),
        metrics.file_lines(),
        metrics.filtered()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the file output.");

    Ok(())
}
