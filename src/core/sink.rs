//! One output destination: a level policy, a writer, and attached fields

use super::{
    appender::Appender, error::Result, level_filter::LevelFilter, log_context::LogContext,
    log_entry::LogEntry, log_level::LogLevel, output_format::OutputFormat,
};
use crate::appenders::RotatingFileAppender;
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a sink writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    Stdout,
    /// A rolling file with its size (MB) and age (days) bounds
    File {
        path: PathBuf,
        max_size_mb: u64,
        max_age_days: u64,
    },
}

impl SinkTarget {
    pub fn path(&self) -> Option<&Path> {
        match self {
            SinkTarget::Stdout => None,
            SinkTarget::File { path, .. } => Some(path),
        }
    }
}

impl fmt::Display for SinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkTarget::Stdout => write!(f, "stdout"),
            SinkTarget::File { path, .. } => write!(f, "{}", path.display()),
        }
    }
}

/// A resolved routing rule and its writer.
///
/// Immutable once built; the writer sits behind its own lock so one sink can
/// be written from many threads without blocking the others.
pub struct Sink {
    target: SinkTarget,
    filter: LevelFilter,
    format: OutputFormat,
    fields: LogContext,
    appender: Mutex<Box<dyn Appender>>,
}

impl Sink {
    pub fn new<A: Appender + 'static>(
        target: SinkTarget,
        filter: LevelFilter,
        format: OutputFormat,
        appender: A,
    ) -> Self {
        Self {
            target,
            filter,
            format,
            fields: LogContext::new(),
            appender: Mutex::new(Box::new(appender)),
        }
    }

    /// A sink over a rolling file. The target reports the appender's own path
    /// and rotation bounds.
    pub fn file(appender: RotatingFileAppender, filter: LevelFilter) -> Self {
        let target = SinkTarget::File {
            path: appender.path().to_path_buf(),
            max_size_mb: appender.policy().max_size_mb(),
            max_age_days: appender.policy().max_age_days,
        };
        let format = appender.output_format();
        Self::new(target, filter, format, appender)
    }

    /// Attach fields written with every record this sink accepts
    #[must_use]
    pub fn with_fields(mut self, fields: LogContext) -> Self {
        self.fields = fields;
        self
    }

    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        self.filter.accepts(level)
    }

    pub fn target(&self) -> &SinkTarget {
        &self.target
    }

    pub fn filter(&self) -> LevelFilter {
        self.filter
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn fields(&self) -> &LogContext {
        &self.fields
    }

    /// Write `entry` if the policy accepts its level.
    ///
    /// Call-site fields take precedence over attached fields with the same key.
    pub fn write(&self, entry: &LogEntry) -> Result<()> {
        if !self.accepts(entry.level) {
            return Ok(());
        }

        let fields = match (&entry.context, self.fields.is_empty()) {
            (None, true) => None,
            (Some(call_site), true) => Some(Cow::Borrowed(call_site)),
            (None, false) => Some(Cow::Borrowed(&self.fields)),
            (Some(call_site), false) => {
                let mut merged = self.fields.clone();
                merged.merge(call_site);
                Some(Cow::Owned(merged))
            }
        };

        let mut appender = self.appender.lock();
        appender.append(entry, fields.as_deref())?;
        appender.flush()
    }

    pub fn flush(&self) -> Result<()> {
        self.appender.lock().flush()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("target", &self.target)
            .field("filter", &self.filter)
            .field("format", &self.format)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
