//! Synchronous fan-out of records to a fixed set of sinks

use super::{
    error::Result, log_context::LogContext, log_entry::LogEntry, log_level::LogLevel,
    metrics::LoggerMetrics, sink::Sink,
};
use std::panic::Location;

/// Alert on the first sink failure and then once per this many
const FAILURE_REPORT_INTERVAL: u64 = 1000;

/// An ordered set of sinks that all see every record.
///
/// Each sink decides independently whether to write a record. A failing or
/// panicking sink is reported on stderr and counted, and never affects the
/// other sinks or the caller.
#[derive(Debug)]
pub struct Pipeline {
    sinks: Vec<Sink>,
    metrics: LoggerMetrics,
}

impl Pipeline {
    pub fn new(sinks: Vec<Sink>) -> Self {
        Self {
            sinks,
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Whether any sink accepts `level`
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.sinks.iter().any(|sink| sink.accepts(level))
    }

    /// Build a record at the caller's location and broadcast it.
    ///
    /// Records at `Error` and above carry a stack trace.
    #[track_caller]
    pub fn emit(&self, level: LogLevel, message: impl Into<String>, fields: Option<LogContext>) {
        if !self.enabled(level) {
            return;
        }

        let mut entry = LogEntry::new(level, message.into()).with_location(Location::caller());
        if level.at_least(LogLevel::Error) {
            entry = entry.with_stacktrace();
        }
        if let Some(fields) = fields.filter(|f| !f.is_empty()) {
            entry = entry.with_context(fields);
        }

        self.dispatch(&entry);
    }

    /// Broadcast an already built record to every sink.
    ///
    /// Returns `true` if some sink failed to write it.
    pub fn dispatch(&self, entry: &LogEntry) -> bool {
        let mut has_error = false;

        for (idx, sink) in self.sinks.iter().enumerate() {
            let result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.write(entry)));

            let failure = match result {
                Ok(Ok(())) => None,
                Ok(Err(e)) => Some(format!(
                    "[LOGGER ERROR] Sink #{} ({}) failed: {}",
                    idx,
                    sink.target(),
                    e
                )),
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    Some(format!(
                        "[LOGGER CRITICAL] Sink #{} ({}) panicked: {}. \
                         Other sinks continue to function.",
                        idx,
                        sink.target(),
                        panic_msg
                    ))
                }
            };

            if let Some(report) = failure {
                has_error = true;
                let previous = self.metrics.record_sink_failure();
                if previous % FAILURE_REPORT_INTERVAL == 0 {
                    eprintln!("{} (failure #{})", report, previous + 1);
                }
            }
        }

        if has_error {
            self.metrics.record_dropped();
        } else {
            self.metrics.record_logged();
        }
        has_error
    }

    /// Flush every sink, returning the first error after trying them all
    pub fn flush(&self) -> Result<()> {
        let mut first_error = None;
        for sink in &self.sinks {
            if let Err(e) = sink.flush() {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
