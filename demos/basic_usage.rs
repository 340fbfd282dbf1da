//! Basic logger usage example
//!
//! Demonstrates console logging at different levels and with mixed parts.
//!
//! Run with: cargo run --example basic_usage

use dual_sink_logger::prelude::*;
use dual_sink_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Dual Sink Logger - Basic Usage Example ===\n");

    // Console threshold defaults to info
    let mut logger = Logger::new();

    println!("1. Logging at different levels (threshold: info):");
    logger.debug("This is a debug message (hidden)");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Mixed message parts:");
    logger.info(msg!["listening on port", 8080, "tls:", false]);
    logger.warn(msg!["cache hit ratio", 0.42, "below", 0.5]);
    logger.info(msg!["peer", serde_json::json!({"addr": "10.0.0.7", "port": 4000})]);

    println!("\n3. Formatting macros:");
    let items = 100;
    info!(logger, "Processing {} items", items);
    warn!(logger, "Retry attempt {} of {}", 3, 5);

    println!("\n4. Level names are case-insensitive:");
    logger.log("WARNING", "resolved through the 'warning' alias")?;
    if let Err(e) = logger.log("verbose", "never printed") {
        println!("   rejected: {}", e);
    }

    println!("\n5. Lowering the threshold at runtime:");
    logger.set_level("debug")?;
    logger.debug("Debug message (now visible)");

    logger.set_level("silent")?;
    logger.error("Error message (silenced)");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
