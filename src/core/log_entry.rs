//! Log entry structure

use super::log_context::LogContext;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::RefCell;
use std::panic::Location;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

/// Get cached thread name, computing and caching it on first access
fn get_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// One emitted record, shared by reference with every sink.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub thread_id: String,
    pub thread_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacktrace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<LogContext>,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: String) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message),
            timestamp: Utc::now(),
            file: None,
            line: None,
            thread_id: get_thread_id(),
            thread_name: get_thread_name(),
            stacktrace: None,
            context: None,
        }
    }

    pub fn with_location(mut self, location: &Location<'_>) -> Self {
        self.file = Some(location.file().to_string());
        self.line = Some(location.line());
        self
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Attach the current stack. Captured regardless of `RUST_BACKTRACE`;
    /// left empty where the platform cannot unwind.
    pub fn with_stacktrace(mut self) -> Self {
        let backtrace = Backtrace::force_capture();
        if backtrace.status() == BacktraceStatus::Captured {
            self.stacktrace = Some(backtrace.to_string());
        }
        self
    }

    /// `file:line` of the call site, if known
    pub fn caller(&self) -> Option<String> {
        match (&self.file, self.line) {
            (Some(file), Some(line)) => Some(format!("{}:{}", file, line)),
            (Some(file), None) => Some(file.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_sanitized() {
        let entry = LogEntry::new(LogLevel::Info, "a\nb\tc\r".to_string());
        assert_eq!(entry.message, "a\\nb\\tc\\r");
    }

    #[test]
    fn test_caller_from_location() {
        let entry = LogEntry::new(LogLevel::Info, "x".into()).with_location(Location::caller());
        let caller = entry.caller().unwrap();
        assert!(caller.starts_with(file!()));
        assert!(caller.contains(':'));
    }

    #[test]
    fn test_caller_absent_without_location() {
        let entry = LogEntry::new(LogLevel::Warn, "x".into());
        assert!(entry.caller().is_none());
        assert!(entry.stacktrace.is_none());
    }
}
