//! Process-wide default logger behavior
//!
//! Kept in its own test binary so no other test can install the default
//! first. Everything runs in a single test because the ordering matters.

use chrono::NaiveDate;
use std::fs;
use tee_logger::{default_logger, Config, LogLevel};
use tempfile::TempDir;

#[test]
fn test_default_logger_lifecycle() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let dir = TempDir::new().expect("Failed to create temp dir");

    // No default yet: free functions and macros do nothing
    assert!(default_logger().is_none());
    tee_logger::info("dropped on the floor");
    tee_logger::panic("no default, no panic");
    tee_logger::fatal("no default, no exit");
    tee_logger::error!("formatted {}", "nothing");

    let first = Config::new()
        .with_filename(dir.path().join("first.log"))
        .with_console_colors(false)
        .init_on(date);
    let second = Config::new()
        .with_filename(dir.path().join("second.log"))
        .with_level(LogLevel::Error)
        .with_console_colors(false)
        .init_on(date);

    // First logger finalized wins
    assert!(default_logger().is_some());
    assert!(!tee_logger::set_default_logger(&second));

    tee_logger::info("via function");
    tee_logger::warnf(format_args!("via {}", "format"));
    tee_logger::debug!("via macro {}", 3);

    let content = fs::read_to_string(dir.path().join("first_2024-03-01.log"))
        .expect("Failed to read default logger file");
    let lines: Vec<_> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("via function"));
    assert!(lines[1].contains("via format"));
    assert!(lines[2].contains("via macro 3"));
    assert!(lines[0].contains("global_default.rs"));

    assert!(!dir.path().join("second_2024-03-01.log").exists());
    assert_eq!(first.metrics().total_logged(), 3);
    drop(second);
}
