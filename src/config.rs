//! Logger configuration builder
//!
//! A [`Config`] accumulates options and is consumed by [`Config::init`],
//! which resolves the dated file names, derives each sink's level policy,
//! and returns an immutable [`Logger`].
//!
//! Routing between the file sinks is disjoint: once a warn or error route is
//! enabled, the levels it takes are no longer written to the main file, so
//! every record lands in exactly one file. The console is not part of the
//! routing and shows everything at or above the configured level.

use crate::appenders::{ConsoleAppender, RotatingFileAppender, RotationPolicy};
use crate::core::{
    LevelFilter, LogContext, LogLevel, Logger, LoggerError, OutputFormat, Pipeline, Result, Sink,
    SinkTarget, TimeLocation, TimestampFormat,
};
use crate::global;
use chrono::{Local, NaiveDate};
use chrono_tz::Tz;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Base file name used when none is configured
pub const DEFAULT_FILENAME: &str = "./app.log";

/// Route suffix of the warn file
pub const WARN_ROUTE: &str = "warn";

/// Route suffix of the error file
pub const ERROR_ROUTE: &str = "error";

/// Insert `_{YYYY-MM-DD}` and an optional `_{route}` between a file's stem
/// and extension, keeping its directory.
///
/// An empty path is returned unchanged.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use std::path::Path;
/// use tee_logger::config::dated_filename;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(
///     dated_filename(Path::new("logs/app.log"), date, Some("warn")),
///     Path::new("logs/app_2024-03-01_warn.log"),
/// );
/// ```
pub fn dated_filename(raw: &Path, date: NaiveDate, route: Option<&str>) -> PathBuf {
    let Some(file_name) = raw.file_name() else {
        return raw.to_path_buf();
    };
    let name = Path::new(file_name);

    let mut derived = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    derived.push('_');
    derived.push_str(&date.format("%Y-%m-%d").to_string());
    if let Some(route) = route {
        derived.push('_');
        derived.push_str(route);
    }
    if let Some(ext) = name.extension() {
        derived.push('.');
        derived.push_str(&ext.to_string_lossy());
    }

    raw.with_file_name(derived)
}

/// Builder for a [`Logger`]
///
/// # Example
/// ```no_run
/// use tee_logger::prelude::*;
///
/// let logger = Config::new()
///     .with_filename("main.log")
///     .with_level(LogLevel::Debug)
///     .with_warn_log("")
///     .with_error_log("")
///     .with_human_time(None)
///     .init();
///
/// logger.warn("goes to main_<date>_warn.log only");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    filename: PathBuf,
    level: LogLevel,
    fields: LogContext,
    human_time: Option<TimeLocation>,
    warn_log: Option<String>,
    error_log: Option<String>,
    rotation: RotationPolicy,
    console_colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filename: PathBuf::from(DEFAULT_FILENAME),
            level: LogLevel::Debug,
            fields: LogContext::new(),
            human_time: None,
            warn_log: None,
            error_log: None,
            rotation: RotationPolicy::default(),
            console_colors: cfg!(feature = "console"),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base file path; an empty string keeps the current one
    #[must_use = "builder methods return a new value"]
    pub fn with_filename(mut self, filename: impl AsRef<Path>) -> Self {
        let filename = filename.as_ref();
        if !filename.as_os_str().is_empty() {
            self.filename = filename.to_path_buf();
        }
        self
    }

    /// Disable the main file sink; console and enabled routes still write
    #[must_use = "builder methods return a new value"]
    pub fn without_file(mut self) -> Self {
        self.filename = PathBuf::new();
        self
    }

    /// Minimum level of the console and of the main file when no route is enabled
    #[must_use = "builder methods return a new value"]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Merge fields attached to every file record; later values win
    #[must_use = "builder methods return a new value"]
    pub fn with_fields(mut self, fields: impl Into<LogContext>) -> Self {
        self.fields.merge(&fields.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<crate::core::FieldValue>,
    ) -> Self {
        self.fields.add_field(key, value);
        self
    }

    /// Render file timestamps as `YYYY-MM-DD HH:MM:SS.mmm` in `zone`, or in
    /// the process-local zone when `None`
    #[must_use = "builder methods return a new value"]
    pub fn with_human_time(mut self, zone: Option<Tz>) -> Self {
        self.human_time = Some(TimeLocation::from(zone));
        self
    }

    /// Enable the warn route; an empty name derives `{base}_{date}_warn{ext}`
    #[must_use = "builder methods return a new value"]
    pub fn with_warn_log(mut self, filename: impl Into<String>) -> Self {
        self.warn_log = Some(filename.into());
        self
    }

    /// Enable the error route; an empty name derives `{base}_{date}_error{ext}`
    #[must_use = "builder methods return a new value"]
    pub fn with_error_log(mut self, filename: impl Into<String>) -> Self {
        self.error_log = Some(filename.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_console_colors(mut self, enabled: bool) -> Self {
        self.console_colors = enabled;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn fields(&self) -> &LogContext {
        &self.fields
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// Policy of the main file sink
    pub fn main_filter(&self) -> LevelFilter {
        match (self.warn_log.is_some(), self.error_log.is_some()) {
            (true, _) => LevelFilter::Below(LogLevel::Warn),
            (false, true) => LevelFilter::Below(LogLevel::Error),
            (false, false) => LevelFilter::AtLeast(self.level),
        }
    }

    /// Policy of the warn route, if enabled
    pub fn warn_filter(&self) -> Option<LevelFilter> {
        self.warn_log.as_ref().map(|_| {
            if self.error_log.is_some() {
                LevelFilter::Exactly(LogLevel::Warn)
            } else {
                LevelFilter::AtLeast(LogLevel::Warn)
            }
        })
    }

    /// Policy of the error route, if enabled
    pub fn error_filter(&self) -> Option<LevelFilter> {
        self.error_log
            .as_ref()
            .map(|_| LevelFilter::AtLeast(LogLevel::Error))
    }

    pub fn console_filter(&self) -> LevelFilter {
        LevelFilter::AtLeast(self.level)
    }

    /// Dated path of the main file, `None` when file output is disabled
    pub fn main_path(&self, date: NaiveDate) -> Option<PathBuf> {
        if self.filename.as_os_str().is_empty() {
            None
        } else {
            Some(dated_filename(&self.filename, date, None))
        }
    }

    fn route_path(&self, explicit: &str, route: &str, date: NaiveDate) -> PathBuf {
        if explicit.is_empty() {
            let base = if self.filename.as_os_str().is_empty() {
                Path::new(DEFAULT_FILENAME)
            } else {
                self.filename.as_path()
            };
            dated_filename(base, date, Some(route))
        } else {
            dated_filename(Path::new(explicit), date, None)
        }
    }

    pub fn warn_path(&self, date: NaiveDate) -> Option<PathBuf> {
        self.warn_log
            .as_deref()
            .map(|name| self.route_path(name, WARN_ROUTE, date))
    }

    pub fn error_path(&self, date: NaiveDate) -> Option<PathBuf> {
        self.error_log
            .as_deref()
            .map(|name| self.route_path(name, ERROR_ROUTE, date))
    }

    fn file_timestamp_format(&self) -> TimestampFormat {
        self.human_time
            .map(TimestampFormat::Human)
            .unwrap_or_default()
    }

    fn file_sink(&self, path: PathBuf, filter: LevelFilter) -> Sink {
        let appender = RotatingFileAppender::with_policy(path, self.rotation.clone())
            .with_output_format(OutputFormat::Json)
            .with_timestamp_format(self.file_timestamp_format());
        Sink::file(appender, filter).with_fields(self.fields.clone())
    }

    /// Console first, then main file, warn route, error route
    fn build_sinks(&self, date: NaiveDate) -> Vec<Sink> {
        let mut sinks = vec![Sink::new(
            SinkTarget::Stdout,
            self.console_filter(),
            OutputFormat::Text,
            ConsoleAppender::with_colors(self.console_colors),
        )];

        if let Some(path) = self.main_path(date) {
            sinks.push(self.file_sink(path, self.main_filter()));
        }
        if let (Some(path), Some(filter)) = (self.warn_path(date), self.warn_filter()) {
            sinks.push(self.file_sink(path, filter));
        }
        if let (Some(path), Some(filter)) = (self.error_path(date), self.error_filter()) {
            sinks.push(self.file_sink(path, filter));
        }

        sinks
    }

    /// Finalize into a [`Logger`], naming files after today's local date.
    ///
    /// The first logger finalized in the process becomes the default used
    /// by the free functions in [`crate::global`].
    pub fn init(self) -> Logger {
        self.init_on(Local::now().date_naive())
    }

    /// Finalize into a [`Logger`], naming files after `date`
    pub fn init_on(self, date: NaiveDate) -> Logger {
        let logger = Logger::new(Pipeline::new(self.build_sinks(date)));
        global::set_default_logger(&logger);
        logger
    }

    /// Build a config from deserialized [`Settings`]
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let mut config = Config::new();

        match settings.filename.as_deref() {
            Some("") => config = config.without_file(),
            Some(name) => config = config.with_filename(name),
            None => {}
        }

        if let Some(level) = settings.level {
            let level = level
                .parse::<LogLevel>()
                .map_err(|e| LoggerError::config("level", e))?;
            config = config.with_level(level);
        }

        if !settings.fields.is_empty() {
            config = config.with_fields(settings.fields.into_iter().collect::<LogContext>());
        }

        if let Some(zone) = settings.human_time {
            let location = TimeLocation::from_name(&zone).ok_or_else(|| {
                LoggerError::config("human_time", format!("unknown timezone '{}'", zone))
            })?;
            config.human_time = Some(location);
        }

        if let Some(name) = settings.warn_log {
            config = config.with_warn_log(name);
        }
        if let Some(name) = settings.error_log {
            config = config.with_error_log(name);
        }
        if let Some(colors) = settings.console_colors {
            config = config.with_console_colors(colors);
        }

        Ok(config)
    }
}

/// Serializable logger setup, e.g. loaded from a JSON file
///
/// ```
/// use tee_logger::config::{Config, Settings};
///
/// let settings = Settings::from_json(r#"{
///     "filename": "logs/service.log",
///     "level": "info",
///     "fields": {"service": "user-service", "replicas": 3},
///     "human_time": "Asia/Shanghai",
///     "error_log": ""
/// }"#).unwrap();
///
/// let config = Config::from_settings(settings).unwrap();
/// assert_eq!(config.fields().len(), 2);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Base file path; `""` disables the main file
    pub filename: Option<String>,
    /// Level name, case-insensitive
    pub level: Option<String>,
    pub fields: HashMap<String, serde_json::Value>,
    /// IANA zone name or `"Local"`
    pub human_time: Option<String>,
    pub warn_log: Option<String>,
    pub error_log: Option<String>,
    pub console_colors: Option<bool>,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_dated_filename_forms() {
        let date = march_first();
        assert_eq!(
            dated_filename(Path::new("./app.log"), date, None),
            Path::new("./app_2024-03-01.log")
        );
        assert_eq!(
            dated_filename(Path::new("/var/log/svc.json"), date, Some(ERROR_ROUTE)),
            Path::new("/var/log/svc_2024-03-01_error.json")
        );
        assert_eq!(
            dated_filename(Path::new("noext"), date, None),
            Path::new("noext_2024-03-01")
        );
        assert_eq!(dated_filename(Path::new(""), date, None), Path::new(""));
    }

    #[test]
    fn test_empty_filename_keeps_default() {
        let config = Config::new().with_filename("");
        assert_eq!(config.filename(), Path::new(DEFAULT_FILENAME));
    }

    #[test]
    fn test_main_filter_without_routes() {
        let config = Config::new().with_level(LogLevel::Info);
        assert_eq!(config.main_filter(), LevelFilter::AtLeast(LogLevel::Info));
        assert_eq!(config.console_filter(), LevelFilter::AtLeast(LogLevel::Info));
        assert_eq!(config.warn_filter(), None);
        assert_eq!(config.error_filter(), None);
    }

    #[test]
    fn test_filters_with_both_routes() {
        let config = Config::new().with_warn_log("").with_error_log("");
        assert_eq!(config.main_filter(), LevelFilter::Below(LogLevel::Warn));
        assert_eq!(config.warn_filter(), Some(LevelFilter::Exactly(LogLevel::Warn)));
        assert_eq!(config.error_filter(), Some(LevelFilter::AtLeast(LogLevel::Error)));
    }

    #[test]
    fn test_filters_with_single_route() {
        let warn_only = Config::new().with_warn_log("");
        assert_eq!(warn_only.main_filter(), LevelFilter::Below(LogLevel::Warn));
        assert_eq!(warn_only.warn_filter(), Some(LevelFilter::AtLeast(LogLevel::Warn)));

        let error_only = Config::new().with_error_log("");
        assert_eq!(error_only.main_filter(), LevelFilter::Below(LogLevel::Error));
        assert_eq!(error_only.error_filter(), Some(LevelFilter::AtLeast(LogLevel::Error)));
    }

    #[test]
    fn test_console_ignores_routing() {
        let config = Config::new()
            .with_level(LogLevel::Warn)
            .with_warn_log("")
            .with_error_log("");
        assert_eq!(config.console_filter(), LevelFilter::AtLeast(LogLevel::Warn));
    }

    #[test]
    fn test_route_paths() {
        let config = Config::new()
            .with_filename("logs/main.log")
            .with_warn_log("")
            .with_error_log("errors.log");
        let date = march_first();

        assert_eq!(
            config.main_path(date).unwrap(),
            Path::new("logs/main_2024-03-01.log")
        );
        assert_eq!(
            config.warn_path(date).unwrap(),
            Path::new("logs/main_2024-03-01_warn.log")
        );
        assert_eq!(
            config.error_path(date).unwrap(),
            Path::new("errors_2024-03-01.log")
        );
    }

    #[test]
    fn test_without_file_derives_routes_from_default() {
        let config = Config::new().without_file().with_warn_log("");
        let date = march_first();

        assert_eq!(config.main_path(date), None);
        assert_eq!(
            config.warn_path(date).unwrap(),
            Path::new("./app_2024-03-01_warn.log")
        );
    }

    #[test]
    fn test_fields_last_write_wins() {
        let config = Config::new()
            .with_fields([("a", 1)].into_iter().collect::<LogContext>())
            .with_fields([("a", 2), ("b", 3)].into_iter().collect::<LogContext>());

        assert_eq!(config.fields().len(), 2);
        assert_eq!(config.fields().get("a").unwrap().to_string(), "2");
    }

    #[test]
    fn test_human_time_is_not_a_field() {
        let config = Config::new()
            .with_field("service", "api")
            .with_human_time(Some(chrono_tz::UTC));

        assert_eq!(config.fields().len(), 1);
        assert_eq!(
            config.file_timestamp_format(),
            TimestampFormat::Human(TimeLocation::Zone(chrono_tz::UTC))
        );
    }

    #[test]
    fn test_settings_errors() {
        let bad_level = Settings {
            level: Some("loud".into()),
            ..Settings::default()
        };
        assert!(matches!(
            Config::from_settings(bad_level),
            Err(LoggerError::InvalidConfiguration { .. })
        ));

        let bad_zone = Settings {
            human_time: Some("Mars/Olympus".into()),
            ..Settings::default()
        };
        assert!(Config::from_settings(bad_zone).is_err());

        assert!(Settings::from_json(r#"{"colour": true}"#).is_err());
    }

    #[test]
    fn test_settings_empty_filename_disables_main_file() {
        let settings = Settings::from_json(r#"{"filename": "", "level": "trace"}"#).unwrap();
        let config = Config::from_settings(settings).unwrap();

        assert_eq!(config.main_path(march_first()), None);
        assert_eq!(config.level(), LogLevel::Debug);
    }
}
