//! File logging example
//!
//! Loads a logger from JSON settings, logs with structured fields, and
//! drives a rotating file appender directly with a tiny size bound.
//!
//! Run with: cargo run --example file_logging

use tee_logger::appenders::{RotatingFileAppender, RotationPolicy};
use tee_logger::prelude::*;
use tee_logger::{Appender, LogEntry};

const SETTINGS: &str = r#"{
    "filename": "logs/application.log",
    "level": "debug",
    "fields": {"service": "inventory", "region": "eu-west-1"},
    "human_time": "Asia/Shanghai",
    "error_log": ""
}"#;

fn main() -> Result<()> {
    println!("=== Tee Logger - File Logging Example ===\n");

    let logger = Config::from_settings(Settings::from_json(SETTINGS)?)?.init();

    println!("1. Logging to console, main file and error file:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warn("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Logging with call-site fields:");
    for i in 1..=5 {
        logger.log_with_context(
            LogLevel::Info,
            "Processing item",
            LogContext::new().with_field("item", i).with_field("of", 5),
        );
    }
    logger.flush()?;

    println!("\n3. Rotating a file by size with compressed backups:");
    let policy = RotationPolicy::new()
        .with_max_bytes(2 * 1024)
        .with_max_age_days(7)
        .with_compression(true);
    let mut appender = RotatingFileAppender::with_policy("logs/rotating.log", policy);
    for i in 0..100 {
        let entry = LogEntry::new(LogLevel::Info, format!("rotation sample line {}", i));
        appender.append(&entry, None)?;
    }
    appender.flush()?;
    println!("   {} backups next to logs/rotating.log", appender.backups().len());

    println!("\n=== Example completed successfully! ===");
    println!("Check logs/application_<today>.log and logs/application_<today>_error.log");

    Ok(())
}
