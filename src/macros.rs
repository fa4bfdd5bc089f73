//! Logging macros for ergonomic log message formatting.
//!
//! Every macro takes either a logger handle followed by `format!`-style
//! arguments, or the format arguments alone to log through the process-wide
//! default logger. Arguments are only formatted when some sink will write
//! the record.
//!
//! # Examples
//!
//! ```no_run
//! use tee_logger::prelude::*;
//! use tee_logger::{error, info};
//!
//! let logger = Config::new().with_filename("server.log").init();
//!
//! // Through a handle
//! info!(logger, "Server started");
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Through the default logger
//! error!("upstream {} unreachable", "db-1");
//! ```

/// Log at an explicit level.
///
/// ```no_run
/// # use tee_logger::prelude::*;
/// # let logger = Config::new().without_file().init();
/// use tee_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:literal $($arg:tt)*) => {
        $crate::global::log_fmt($level, format_args!($fmt $($arg)*))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, format_args!($($arg)+))
    };
}

/// Log a trace-level message; recorded at debug severity.
#[macro_export]
macro_rules! trace {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Debug, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// ```no_run
/// # use tee_logger::prelude::*;
/// # let logger = Config::new().without_file().init();
/// use tee_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Debug, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Info, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Warn, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```no_run
/// # use tee_logger::prelude::*;
/// # let logger = Config::new().without_file().init();
/// use tee_logger::error;
/// let code = 503;
/// error!(logger, "Request failed with status {}", code);
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::log!($crate::LogLevel::Error, $fmt $($arg)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log at panic level, flush, then panic.
///
/// Without a handle this is a no-op until a default logger exists.
#[macro_export]
macro_rules! panic_log {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::panicf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.panicf(format_args!($($arg)+))
    };
}

/// Log at fatal level, flush, then exit the process.
///
/// Without a handle this is a no-op until a default logger exists.
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($arg:tt)*) => {
        $crate::global::fatalf(format_args!($fmt $($arg)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatalf(format_args!($($arg)+))
    };
}
