//! Console appender implementation

use crate::core::{Appender, LogContext, LogEntry, OutputFormat, Result, TimestampFormat};
use std::io::Write;

/// Writes human-readable lines to stdout.
///
/// Each line is written while holding the stdout lock, so concurrent
/// records never interleave mid-line.
pub struct ConsoleAppender {
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: cfg!(feature = "console"),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Render a record the way this appender prints it
    pub fn render(&self, entry: &LogEntry, fields: Option<&LogContext>) -> String {
        OutputFormat::Text.format(entry, fields, &TimestampFormat::Iso8601, self.use_colors)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry, fields: Option<&LogContext>) -> Result<()> {
        let output = self.render(entry, fields);

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", output)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }
}
