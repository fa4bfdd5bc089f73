//! Output format configuration for log entries
//!
//! - Text: human-readable line, used by the console sink
//! - Json: one object per line, used by file sinks

use super::log_context::LogContext;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;

/// Keys every JSON record owns. Fields with these names are written as
/// `fields.<name>`.
pub const RECORD_KEYS: [&str; 5] = ["ts", "level", "caller", "msg", "stacktrace"];

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    ///
    /// Example: `2025-01-08T10:30:45.123Z  INFO  src/main.rs:12  Request processed  user=42`
    #[default]
    Text,

    /// JSON format for machine processing
    ///
    /// Example:
    /// `{"ts":"2025-01-08T10:30:45.123Z","level":"INFO","msg":"Request processed","user":42}`
    Json,
}

impl OutputFormat {
    /// Format a log entry. `fields` are the merged call-site and sink fields.
    pub fn format(
        &self,
        entry: &LogEntry,
        fields: Option<&LogContext>,
        timestamp_format: &TimestampFormat,
        use_colors: bool,
    ) -> String {
        match self {
            OutputFormat::Text => Self::format_text(entry, fields, timestamp_format, use_colors),
            OutputFormat::Json => Self::format_json(entry, fields, timestamp_format),
        }
    }

    /// Format as human-readable text
    fn format_text(
        entry: &LogEntry,
        fields: Option<&LogContext>,
        timestamp_format: &TimestampFormat,
        use_colors: bool,
    ) -> String {
        let timestamp_str = timestamp_format.format(&entry.timestamp);
        let level_str = Self::level_label(entry, use_colors);

        let mut output = format!("{}\t{}", timestamp_str, level_str);
        if let Some(caller) = entry.caller() {
            output.push('\t');
            output.push_str(&caller);
        }
        output.push('\t');
        output.push_str(&entry.message);

        if let Some(context) = fields {
            if !context.is_empty() {
                output.push('\t');
                output.push_str(&context.format_fields());
            }
        }

        if let Some(ref stack) = entry.stacktrace {
            output.push('\n');
            output.push_str(stack.trim_end());
        }

        output
    }

    #[cfg(feature = "console")]
    fn level_label(entry: &LogEntry, use_colors: bool) -> String {
        use colored::Colorize;

        let label = format!("{:5}", entry.level.to_str());
        if use_colors {
            label.color(entry.level.color_code()).to_string()
        } else {
            label
        }
    }

    #[cfg(not(feature = "console"))]
    fn level_label(entry: &LogEntry, _use_colors: bool) -> String {
        format!("{:5}", entry.level.to_str())
    }

    /// Format as JSON
    fn format_json(
        entry: &LogEntry,
        fields: Option<&LogContext>,
        timestamp_format: &TimestampFormat,
    ) -> String {
        let mut json_obj = serde_json::Map::new();

        json_obj.insert(
            "ts".to_string(),
            timestamp_format.to_json_value(&entry.timestamp),
        );
        json_obj.insert(
            "level".to_string(),
            serde_json::Value::String(entry.level.to_str().to_string()),
        );
        if let Some(caller) = entry.caller() {
            json_obj.insert("caller".to_string(), serde_json::Value::String(caller));
        }
        json_obj.insert(
            "msg".to_string(),
            serde_json::Value::String(entry.message.clone()),
        );
        if let Some(ref stack) = entry.stacktrace {
            json_obj.insert(
                "stacktrace".to_string(),
                serde_json::Value::String(stack.clone()),
            );
        }

        // Record keys stay authoritative; a colliding field moves under `fields.`
        if let Some(context) = fields {
            for (key, value) in context.fields() {
                let key = if RECORD_KEYS.contains(&key.as_str()) {
                    format!("fields.{}", key)
                } else {
                    key.clone()
                };
                json_obj.insert(key, value.to_json_value());
            }
        }

        serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default()
    }
}
