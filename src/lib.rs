//! # Tee Logger
//!
//! A structured logging facade that fans every record out to the console
//! and up to three rolling files, with each file owning a disjoint slice of
//! the severity range.
//!
//! ## Features
//!
//! - **Level routing**: warnings and errors can be split into their own
//!   files, and each record then lands in exactly one file
//! - **Dated files**: names carry the creation date, e.g. `app_2024-03-01_warn.log`
//! - **Rotation**: size-bounded files with age-based cleanup of backups
//! - **Structured fields**: attached per logger and per call, written as JSON
//! - **Default logger**: the first logger built serves free functions and macros
//!
//! ## Example
//!
//! ```no_run
//! use tee_logger::prelude::*;
//!
//! let logger = Config::new()
//!     .with_filename("logs/app.log")
//!     .with_level(LogLevel::Info)
//!     .with_field("service", "billing")
//!     .with_error_log("")
//!     .init();
//!
//! logger.info("ready");
//! tee_logger::error("also reaches logs/app_<date>_error.log");
//! ```

pub mod appenders;
pub mod config;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::config::{Config, Settings};
    pub use crate::core::{
        FieldValue, LevelFilter, LogContext, LogLevel, Logger, LoggerError, Result,
        TimeLocation, TimestampFormat,
    };
}

pub use crate::appenders::{ConsoleAppender, RotatingFileAppender, RotationPolicy};
pub use crate::config::{dated_filename, Config, Settings, DEFAULT_FILENAME};
pub use crate::core::{
    Appender, FieldValue, LevelFilter, LogContext, LogEntry, LogLevel, Logger, LoggerError,
    LoggerMetrics, OutputFormat, Pipeline, Result, Sink, SinkTarget, TimeLocation,
    TimestampFormat, RECORD_KEYS,
};
pub use crate::global::{
    debug, debugf, default_logger, error, errorf, fatal, fatalf, info, infof, panic, panicf,
    set_default_logger, trace, tracef, warn, warnf,
};
