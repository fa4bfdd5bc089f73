//! Main logger implementation

use super::{
    error::Result, log_context::LogContext, log_level::LogLevel, metrics::LoggerMetrics,
    pipeline::Pipeline,
};
use std::fmt;
use std::sync::Arc;

/// Exit status used by [`Logger::fatal`]
pub const FATAL_EXIT_CODE: i32 = 1;

/// Immutable handle over one [`Pipeline`].
///
/// Cloning is cheap and clones share the pipeline. Independently built
/// loggers share nothing.
///
/// # Example
/// ```no_run
/// use tee_logger::prelude::*;
///
/// let logger = Config::new()
///     .with_filename("service.log")
///     .with_level(LogLevel::Info)
///     .with_field("service", "order-service")
///     .init();
///
/// logger.info("order service started");
/// logger.errorf(format_args!("order {} failed", 42));
/// ```
#[derive(Clone)]
pub struct Logger {
    pipeline: Arc<Pipeline>,
}

impl Logger {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// The underlying pipeline, for emitting records with fields directly
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        self.pipeline.metrics()
    }

    /// Whether a record at `level` would be written anywhere
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.pipeline.enabled(level)
    }

    /// Get the number of records some sink failed to write
    pub fn dropped_count(&self) -> u64 {
        self.pipeline.metrics().dropped_count()
    }

    pub fn flush(&self) -> Result<()> {
        self.pipeline.flush()
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.pipeline.emit(level, message, None);
    }

    /// Log with structured call-site fields
    #[track_caller]
    pub fn log_with_context(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        context: LogContext,
    ) {
        self.pipeline.emit(level, message, Some(context));
    }

    /// Log pre-formatted arguments, formatting only if some sink will write them
    #[track_caller]
    pub fn log_fmt(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            self.pipeline.emit(level, args.to_string(), None);
        }
    }

    /// Trace is recorded at debug severity
    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Log, flush every sink, then panic with the message
    #[track_caller]
    pub fn panic(&self, message: impl Into<String>) -> ! {
        let message = message.into();
        self.pipeline.emit(LogLevel::Panic, message.clone(), None);
        let _ = self.pipeline.flush();
        panic!("{}", message);
    }

    /// Log, flush every sink, then exit the process with [`FATAL_EXIT_CODE`]
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.pipeline.emit(LogLevel::Fatal, message, None);
        let _ = self.pipeline.flush();
        std::process::exit(FATAL_EXIT_CODE);
    }

    #[track_caller]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Debug, args);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Debug, args);
    }

    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Info, args);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Warn, args);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(LogLevel::Error, args);
    }

    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.panic(args.to_string())
    }

    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal(args.to_string())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sinks", &self.pipeline.sinks().len())
            .finish_non_exhaustive()
    }
}
