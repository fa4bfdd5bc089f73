//! Timestamp formatting utilities
//!
//! File sinks default to a machine-oriented ISO 8601 UTC stamp. A logger
//! configured with human time renders `2025-01-08 18:30:45.123` in the
//! process-local zone or a named IANA zone instead.

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use std::fmt;

/// strftime pattern of human-readable timestamps
pub const HUMAN_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Zone a human-readable timestamp is rendered in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeLocation {
    /// The process's local timezone
    #[default]
    Local,
    /// A named IANA zone such as `Asia/Shanghai` or `UTC`
    Zone(Tz),
}

impl TimeLocation {
    /// Look up a zone by IANA name; `"Local"` selects the process zone.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("local") {
            return Some(TimeLocation::Local);
        }
        name.parse::<Tz>().ok().map(TimeLocation::Zone)
    }
}

impl From<Option<Tz>> for TimeLocation {
    fn from(zone: Option<Tz>) -> Self {
        zone.map(TimeLocation::Zone).unwrap_or_default()
    }
}

impl From<Tz> for TimeLocation {
    fn from(zone: Tz) -> Self {
        TimeLocation::Zone(zone)
    }
}

impl fmt::Display for TimeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeLocation::Local => write!(f, "Local"),
            TimeLocation::Zone(tz) => write!(f, "{}", tz.name()),
        }
    }
}

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use tee_logger::core::{TimeLocation, TimestampFormat};
/// use chrono::{TimeZone, Utc};
///
/// let ts = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let human = TimestampFormat::Human(TimeLocation::Zone(chrono_tz::Asia::Shanghai));
/// assert_eq!(human.format(&ts), "2025-01-08 18:30:45.000");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampFormat {
    /// ISO 8601 in UTC with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// Human-readable wall-clock time: `2025-01-08 18:30:45.123`
    Human(TimeLocation),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Human(TimeLocation::Local) => datetime
                .with_timezone(&Local)
                .format(HUMAN_TIME_FORMAT)
                .to_string(),
            TimestampFormat::Human(TimeLocation::Zone(tz)) => datetime
                .with_timezone(tz)
                .format(HUMAN_TIME_FORMAT)
                .to_string(),
        }
    }

    #[must_use]
    pub fn to_json_value(&self, datetime: &DateTime<Utc>) -> serde_json::Value {
        serde_json::Value::String(self.format(datetime))
    }
}
