//! Stress tests for concurrent logging through shared sinks
//!
//! These tests verify:
//! - No record is lost or torn when many threads share one logger
//! - Rotation under contention keeps every line across active file and backups
//! - A broken sink under load never starves the healthy ones

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use tee_logger::appenders::{RotatingFileAppender, RotationPolicy};
use tee_logger::{Config, LevelFilter, LogLevel, Logger, Pipeline, Sink};
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

fn count_json_lines(path: &Path) -> usize {
    let content = fs::read_to_string(path).expect("Failed to read log file");
    content
        .lines()
        .inspect(|line| {
            serde_json::from_str::<serde_json::Value>(line)
                .unwrap_or_else(|e| panic!("torn line {line:?}: {e}"));
        })
        .count()
}

fn hammer(logger: &Arc<Logger>, level_for: fn(usize) -> LogLevel) {
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(logger);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    logger.log(level_for(i), format!("thread {} message {}", t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }
}

/// Every routed file receives exactly its share under contention
#[test]
fn test_routed_files_under_contention() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let logger = Arc::new(
        Config::new()
            .with_filename(temp_dir.path().join("load.log"))
            .with_level(LogLevel::Error)
            .with_warn_log("")
            .with_error_log("")
            .with_console_colors(false)
            .init_on(date),
    );

    hammer(&logger, |i| match i % 3 {
        0 => LogLevel::Info,
        1 => LogLevel::Warn,
        _ => LogLevel::Error,
    });

    let per_level = |rem: usize| THREADS * (0..PER_THREAD).filter(|i| i % 3 == rem).count();
    assert_eq!(
        count_json_lines(&temp_dir.path().join("load_2024-03-01.log")),
        per_level(0)
    );
    assert_eq!(
        count_json_lines(&temp_dir.path().join("load_2024-03-01_warn.log")),
        per_level(1)
    );
    assert_eq!(
        count_json_lines(&temp_dir.path().join("load_2024-03-01_error.log")),
        per_level(2)
    );
    assert_eq!(logger.dropped_count(), 0);
    assert_eq!(logger.metrics().total_logged() as usize, THREADS * PER_THREAD);
}

/// Rotation while many threads write keeps every record somewhere on disk
#[test]
fn test_rotation_under_contention() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("rotating.log");

    let appender = RotatingFileAppender::with_policy(
        &path,
        RotationPolicy::default().with_max_bytes(16 * 1024),
    );
    let sink = Sink::file(appender, LevelFilter::default());
    let logger = Arc::new(Logger::new(Pipeline::new(vec![sink])));

    hammer(&logger, |_| LogLevel::Info);

    let inspector = RotatingFileAppender::new(&path);
    let backups = inspector.backups();
    assert!(!backups.is_empty(), "expected at least one rotation");

    let total: usize = backups
        .iter()
        .map(|b| count_json_lines(b))
        .sum::<usize>()
        + count_json_lines(&path);
    assert_eq!(total, THREADS * PER_THREAD);
}

/// A sink that can never open its file does not block the others
#[test]
fn test_broken_sink_under_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("not_a_dir");
    fs::write(&blocker, b"file in the way").expect("Failed to create blocker");

    let broken_path = blocker.join("broken.log");
    let healthy_path = temp_dir.path().join("healthy.log");

    let sinks = vec![
        Sink::file(RotatingFileAppender::new(&broken_path), LevelFilter::default()),
        Sink::file(RotatingFileAppender::new(&healthy_path), LevelFilter::default()),
    ];
    let logger = Arc::new(Logger::new(Pipeline::new(sinks)));

    hammer(&logger, |_| LogLevel::Warn);

    assert_eq!(count_json_lines(&healthy_path), THREADS * PER_THREAD);
    assert_eq!(logger.dropped_count() as usize, THREADS * PER_THREAD);
    assert_eq!(
        logger.metrics().sink_failures() as usize,
        THREADS * PER_THREAD
    );
}
