//! Delegated logging example
//!
//! Demonstrates component loggers that add a colored prefix and share one
//! base logger for filtering and output.
//!
//! Run with: cargo run --example delegated_logging

use dual_sink_logger::prelude::*;
use std::sync::Arc;
use std::thread;

fn main() -> Result<()> {
    println!("=== Dual Sink Logger - Delegated Logging Example ===\n");

    let base = Arc::new(Logger::builder().level("debug").build()?);

    println!("1. One prefix per component:");
    let http = DelegatedLogger::new(base.clone(), DelegateOptions::new("http").with_color("green"));
    let db = DelegatedLogger::new(base.clone(), DelegateOptions::new("db").with_color("magenta"));
    http.info(msg!["GET /health", 200]);
    db.debug(msg!["query took", 3, "ms"]);

    println!("\n2. Nested prefixes, outermost first:");
    let router = DelegatedLogger::new(
        Arc::new(http.clone()),
        DelegateOptions::new("router").with_color("bright blue"),
    );
    router.warn("no route for /favicon.ico");

    println!("\n3. Sharing delegates across threads:");
    let handles: Vec<_> = (0..3)
        .map(|id| {
            let worker = DelegatedLogger::with_prefix(base.clone(), format!("worker-{}", id));
            thread::spawn(move || {
                worker.info(msg!["job", id, "done"]);
            })
        })
        .collect();
    for handle in handles {
        let _ = handle.join();
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
