//! Process-wide default logger and the free logging functions over it
//!
//! The first [`Logger`] finalized in the process becomes the default. Later
//! loggers never replace it. Until one exists every function here is a
//! silent no-op, so legacy call sites can log without a handle.

use crate::core::{LogContext, LogLevel, Logger};
use std::fmt;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide default, if one has been constructed
pub fn default_logger() -> Option<&'static Logger> {
    DEFAULT_LOGGER.get()
}

/// Install `logger` as the default unless one already exists.
///
/// Returns `true` if `logger` became the default.
pub fn set_default_logger(logger: &Logger) -> bool {
    DEFAULT_LOGGER.set(logger.clone()).is_ok()
}

#[track_caller]
pub fn log(level: LogLevel, message: impl Into<String>) {
    if let Some(logger) = default_logger() {
        logger.log(level, message);
    }
}

#[track_caller]
pub fn log_with_context(level: LogLevel, message: impl Into<String>, context: LogContext) {
    if let Some(logger) = default_logger() {
        logger.log_with_context(level, message, context);
    }
}

#[track_caller]
pub fn log_fmt(level: LogLevel, args: fmt::Arguments<'_>) {
    if let Some(logger) = default_logger() {
        logger.log_fmt(level, args);
    }
}

#[track_caller]
pub fn trace(message: impl Into<String>) {
    log(LogLevel::Debug, message);
}

#[track_caller]
pub fn debug(message: impl Into<String>) {
    log(LogLevel::Debug, message);
}

#[track_caller]
pub fn info(message: impl Into<String>) {
    log(LogLevel::Info, message);
}

#[track_caller]
pub fn warn(message: impl Into<String>) {
    log(LogLevel::Warn, message);
}

#[track_caller]
pub fn error(message: impl Into<String>) {
    log(LogLevel::Error, message);
}

/// Panics after logging; does nothing when no default exists
#[track_caller]
pub fn panic(message: impl Into<String>) {
    if let Some(logger) = default_logger() {
        logger.panic(message);
    }
}

/// Exits the process after logging; does nothing when no default exists
#[track_caller]
pub fn fatal(message: impl Into<String>) {
    if let Some(logger) = default_logger() {
        logger.fatal(message);
    }
}

#[track_caller]
pub fn tracef(args: fmt::Arguments<'_>) {
    log_fmt(LogLevel::Debug, args);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    log_fmt(LogLevel::Debug, args);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    log_fmt(LogLevel::Info, args);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    log_fmt(LogLevel::Warn, args);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    log_fmt(LogLevel::Error, args);
}

#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) {
    if let Some(logger) = default_logger() {
        logger.panicf(args);
    }
}

#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) {
    if let Some(logger) = default_logger() {
        logger.fatalf(args);
    }
}
