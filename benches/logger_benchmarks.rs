//! Criterion benchmarks for tee_logger

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Write;
use std::sync::Arc;
use tee_logger::prelude::*;
use tee_logger::{
    Appender, LogEntry, OutputFormat, Pipeline, RotatingFileAppender, Sink, SinkTarget,
};
use tempfile::TempDir;

/// Formats like a real sink, then discards the bytes
struct NullAppender {
    format: OutputFormat,
    timestamp_format: TimestampFormat,
}

impl NullAppender {
    fn new(format: OutputFormat, timestamp_format: TimestampFormat) -> Self {
        Self {
            format,
            timestamp_format,
        }
    }
}

impl Appender for NullAppender {
    fn append(&mut self, entry: &LogEntry, fields: Option<&LogContext>) -> Result<()> {
        let line = self
            .format
            .format(entry, fields, &self.timestamp_format, false);
        writeln!(std::io::sink(), "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Console plus three routed files, all discarding output
fn routed_null_logger(timestamp_format: TimestampFormat) -> Logger {
    let config = Config::new()
        .with_level(LogLevel::Debug)
        .with_warn_log("")
        .with_error_log("")
        .with_field("service", "bench")
        .with_field("region", "eu-west-1");

    let file_filters = std::iter::once(config.main_filter())
        .chain(config.warn_filter())
        .chain(config.error_filter());

    let mut sinks = vec![Sink::new(
        SinkTarget::Stdout,
        config.console_filter(),
        OutputFormat::Text,
        NullAppender::new(OutputFormat::Text, TimestampFormat::Iso8601),
    )];
    for filter in file_filters {
        sinks.push(
            Sink::new(
                SinkTarget::Stdout,
                filter,
                OutputFormat::Json,
                NullAppender::new(OutputFormat::Json, timestamp_format),
            )
            .with_fields(config.fields().clone()),
        );
    }
    Logger::new(Pipeline::new(sinks))
}

// ============================================================================
// Logger Construction Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let dir = TempDir::new().unwrap();

    group.bench_function("init_all_routes", |b| {
        b.iter(|| {
            let logger = Config::new()
                .with_filename(dir.path().join("bench.log"))
                .with_warn_log("")
                .with_error_log("")
                .init_on(black_box(date));
            black_box(logger)
        });
    });

    group.bench_function("dated_filename", |b| {
        let raw = dir.path().join("bench.log");
        b.iter(|| black_box(tee_logger::dated_filename(&raw, date, Some("warn"))));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_routed_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("routed_dispatch");
    group.throughput(Throughput::Elements(1));

    let logger = routed_null_logger(TimestampFormat::Iso8601);
    for level in [LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
        group.bench_with_input(BenchmarkId::new("level", level), &level, |b, &level| {
            b.iter(|| logger.log(level, black_box("Benchmark message")));
        });
    }

    let human = routed_null_logger(TimestampFormat::Human(TimeLocation::Zone(
        chrono_tz::Asia::Shanghai,
    )));
    group.bench_function("human_time", |b| {
        b.iter(|| human.info(black_box("Benchmark message")));
    });

    group.bench_function("with_call_site_fields", |b| {
        b.iter(|| {
            logger.log_with_context(
                LogLevel::Info,
                "Benchmark message",
                LogContext::new()
                    .with_field("request_id", 42)
                    .with_field("path", "/api/users"),
            )
        });
    });

    group.finish();
}

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");

    let quiet = Config::new().with_level(LogLevel::Error);
    let logger = {
        let sink = Sink::new(
            SinkTarget::Stdout,
            quiet.console_filter(),
            OutputFormat::Text,
            NullAppender::new(OutputFormat::Text, TimestampFormat::Iso8601),
        );
        Logger::new(Pipeline::new(vec![sink]))
    };

    group.bench_function("filtered_out", |b| {
        b.iter(|| logger.debug(black_box("filtered")));
    });

    group.bench_function("filtered_out_formatted", |b| {
        b.iter(|| logger.debugf(format_args!("value {}", black_box(42))));
    });

    group.finish();
}

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4, 8] {
        group.throughput(Throughput::Elements((threads * 100) as u64));
        group.bench_with_input(BenchmarkId::new("threads", threads), &threads, |b, &threads| {
            let logger = Arc::new(routed_null_logger(TimestampFormat::Iso8601));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for i in 0..100 {
                                logger.warnf(format_args!("message {}", i));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// File Output Benchmarks
// ============================================================================

fn bench_file_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_append");
    group.throughput(Throughput::Elements(1));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("append.log");
    let mut appender = RotatingFileAppender::new(&path);
    let fields = LogContext::new().with_field("service", "bench");
    let entry = LogEntry::new(LogLevel::Info, "Benchmark message".to_string());

    group.bench_function("json_line", |b| {
        b.iter(|| appender.append(black_box(&entry), Some(&fields)).unwrap());
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_logger_creation,
    bench_routed_dispatch,
    bench_level_filtering,
    bench_concurrent_logging,
    bench_file_append
);

criterion_main!(benches);
