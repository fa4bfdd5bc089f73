//! Multiple independent loggers example
//!
//! Each service gets its own logger with its own file, level and fields.
//! A third logger splits warnings and errors into separate files.
//!
//! Run with: cargo run --example multi_logger

use std::thread;
use std::time::Duration;
use tee_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Tee Logger - Multiple Loggers Example ===\n");

    // Default instance for legacy call sites
    Config::new().with_filename("logs/app.log").init();
    tee_logger::info("using default logger");

    // Service 1 records everything
    let service1 = Config::new()
        .with_filename("logs/service1.log")
        .with_level(LogLevel::Debug)
        .with_fields(
            [("service", "user-service"), ("version", "1.0.0")]
                .into_iter()
                .collect::<LogContext>(),
        )
        .init();

    // Service 2 only records important events
    let service2 = Config::new()
        .with_filename("logs/service2.log")
        .with_level(LogLevel::Info)
        .with_fields(
            [("service", "order-service"), ("version", "2.1.0")]
                .into_iter()
                .collect::<LogContext>(),
        )
        .init();

    // Warnings and errors each get their own file
    let routed = Config::new()
        .with_filename("logs/main.log")
        .with_level(LogLevel::Debug)
        .with_warn_log("logs/warn.log")
        .with_error_log("logs/error.log")
        .with_human_time(None)
        .init();

    service1.debug("user service debug message");
    service1.info("user service started");

    service2.debug("order service debug message"); // below Info, not recorded
    service2.info("order service started");
    service2.error("order service error");

    routed.debug("application debug");
    routed.warn("application warning");
    routed.error("application error");

    // Loggers are cheap to clone and safe to share across threads
    let worker = thread::spawn(|| {
        let async_logger = Config::new()
            .with_filename("logs/async.log")
            .with_field("thread", "worker-1")
            .init();

        for i in 0..5 {
            async_logger.infof(format_args!("async message {}", i));
            thread::sleep(Duration::from_millis(100));
        }
    });
    worker.join().expect("worker thread panicked");

    tee_logger::info("all loggers demonstration completed");

    println!("\nFiles written under logs/:");
    println!("  main_<today>.log        debug and info only");
    println!("  warn_<today>.log        warnings only");
    println!("  error_<today>.log       errors and above");

    Ok(())
}
