//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod level_filter;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod output_format;
pub mod pipeline;
pub mod sink;
pub mod timestamp;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use level_filter::LevelFilter;
pub use log_context::{FieldValue, LogContext};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use output_format::{OutputFormat, RECORD_KEYS};
pub use pipeline::Pipeline;
pub use sink::{Sink, SinkTarget};
pub use timestamp::{TimeLocation, TimestampFormat, HUMAN_TIME_FORMAT};
