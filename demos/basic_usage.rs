//! Basic logger usage example
//!
//! Builds the process-wide default logger and logs through the free
//! functions and macros, without holding a handle.
//!
//! Run with: cargo run --example basic_usage

use tee_logger::prelude::*;
use tee_logger::{debug, error, info, warn};

fn main() -> Result<()> {
    println!("=== Tee Logger - Basic Usage Example ===\n");

    // The first logger finalized becomes the default
    let logger = Config::new()
        .with_filename("logs/app.log")
        .with_level(LogLevel::Debug)
        .init();

    println!("1. Logging through the default logger:");
    tee_logger::debug("this is a simple debugging log");
    tee_logger::warnf(format_args!("this is a warning log with string {}", "fmt"));
    tee_logger::errorf(format_args!("this is an error level log with string {}", "fmt"));
    tee_logger::infof(format_args!("this is an info level log with string {}", "fmt"));

    println!("\n2. The same through macros:");
    debug!("cache warmed in {} ms", 12);
    info!("listening on {}:{}", "0.0.0.0", 8080);
    warn!("pool at {}% capacity", 85);
    error!("upstream {} unreachable", "db-1");

    println!("\n3. Trace is recorded at debug severity:");
    tee_logger::trace("trace message shows up as DEBUG");

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");
    println!("Check logs/app_<today>.log for the JSON records");

    Ok(())
}
