//! Appender trait for log output destinations

use super::{error::Result, log_context::LogContext, log_entry::LogEntry};

/// A writer behind one sink.
///
/// `fields` is the field set resolved for this sink: call-site fields plus
/// the sink's attached fields.
pub trait Appender: Send {
    fn append(&mut self, entry: &LogEntry, fields: Option<&LogContext>) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}
