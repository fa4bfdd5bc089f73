//! Rotating file appender with size-based rolling and age-based cleanup
//!
//! The active file keeps its configured name. When a write would push it past
//! the size bound it is renamed to a timestamped backup next to it
//! (`app_2024-03-01-2024-03-01T14-05-09.120.log`) and a fresh file is opened.
//! Backups older than the age bound are removed after each rotation.

use crate::core::appender::Appender;
use crate::core::error::{LoggerError, Result};
use crate::core::log_context::LogContext;
use crate::core::log_entry::LogEntry;
use crate::core::output_format::OutputFormat;
use crate::core::timestamp::TimestampFormat;
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

const BYTES_PER_MB: u64 = 1024 * 1024;
const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Default size bound of the active file, in megabytes
pub const DEFAULT_MAX_SIZE_MB: u64 = 500;

/// Default retention of rotated backups, in days
pub const DEFAULT_MAX_AGE_DAYS: u64 = 30;

/// Bounds for a rotating file appender
///
/// # Examples
///
/// ```
/// use tee_logger::appenders::RotationPolicy;
///
/// let policy = RotationPolicy::new()
///     .with_max_size_mb(100)
///     .with_max_age_days(7)
///     .with_compression(true);
///
/// assert_eq!(policy.max_bytes, 100 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Size bound of the active file; 0 disables rotation
    pub max_bytes: u64,
    /// Backups older than this many days are deleted; 0 keeps them all
    pub max_age_days: u64,
    /// Whether to gzip rotated backups
    pub compress: bool,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_SIZE_MB * BYTES_PER_MB,
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            compress: false,
        }
    }
}

impl RotationPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_size_mb(mut self, megabytes: u64) -> Self {
        self.max_bytes = megabytes.saturating_mul(BYTES_PER_MB);
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_bytes(mut self, bytes: u64) -> Self {
        self.max_bytes = bytes;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_age_days(mut self, days: u64) -> Self {
        self.max_age_days = days;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.compress = enabled;
        self
    }

    /// Size bound in whole megabytes
    #[must_use]
    pub fn max_size_mb(&self) -> u64 {
        self.max_bytes / BYTES_PER_MB
    }

    /// Retention as a duration, `None` when backups are kept forever
    #[must_use]
    pub fn max_age(&self) -> Option<Duration> {
        (self.max_age_days > 0).then(|| Duration::from_secs(self.max_age_days * SECS_PER_DAY))
    }
}

/// File appender that rolls its file by size and prunes old backups
///
/// The file is opened on the first write, so an unusable path surfaces as a
/// write error rather than a construction failure.
///
/// # Examples
///
/// ```no_run
/// use tee_logger::appenders::{RotatingFileAppender, RotationPolicy};
/// use tee_logger::OutputFormat;
///
/// let appender = RotatingFileAppender::with_policy(
///     "/var/log/app_2024-03-01.log",
///     RotationPolicy::new().with_max_size_mb(100),
/// )
/// .with_output_format(OutputFormat::Json);
/// ```
pub struct RotatingFileAppender {
    path: PathBuf,
    policy: RotationPolicy,
    output_format: OutputFormat,
    timestamp_format: TimestampFormat,
    file: Option<File>,
    current_size: u64,
}

impl RotatingFileAppender {
    /// Create a rotating appender with the default bounds
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_policy(path, RotationPolicy::default())
    }

    pub fn with_policy<P: AsRef<Path>>(path: P, policy: RotationPolicy) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            policy,
            output_format: OutputFormat::Json,
            timestamp_format: TimestampFormat::default(),
            file: None,
            current_size: 0,
        }
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Open the active file, creating its directory if needed
    fn open(&mut self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| LoggerError::file("create directory", parent, e))?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LoggerError::file("open", &self.path, e))?;

        self.current_size = file.metadata().map(|m| m.len()).unwrap_or(0);
        self.file = Some(file);
        Ok(())
    }

    fn should_rotate(&self, incoming: u64) -> bool {
        self.policy.max_bytes > 0
            && self.current_size > 0
            && self.current_size + incoming > self.policy.max_bytes
    }

    /// Move the active file aside and start a fresh one
    fn rotate(&mut self) -> Result<()> {
        // Release the handle before renaming
        self.file.take();

        let backup = self.backup_path();
        if self.path.exists() {
            fs::rename(&self.path, &backup).map_err(|e| LoggerError::rotation(&self.path, e))?;

            if self.policy.compress {
                self.compress_file(&backup)?;
            }
        }

        self.open()?;
        self.remove_expired_backups();
        Ok(())
    }

    fn name_parts(&self) -> (String, String) {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "app".to_string());
        let ext = self
            .path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        (stem, ext)
    }

    /// `{stem}-{local timestamp}{ext}`, disambiguated if a backup from the
    /// same millisecond already exists
    fn backup_path(&self) -> PathBuf {
        let (stem, ext) = self.name_parts();
        let stamp = Local::now().format("%Y-%m-%dT%H-%M-%S%.3f");

        let mut candidate = self.path.with_file_name(format!("{}-{}{}", stem, stamp, ext));
        let mut n = 1;
        while candidate.exists() || gz_path(&candidate).exists() {
            candidate = self
                .path
                .with_file_name(format!("{}-{}.{}{}", stem, stamp, n, ext));
            n += 1;
        }
        candidate
    }

    /// Backups of this file currently on disk
    pub fn backups(&self) -> Vec<PathBuf> {
        let (stem, ext) = self.name_parts();
        let prefix = format!("{}-", stem);
        let gz_ext = format!("{}.gz", ext);

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let Ok(entries) = fs::read_dir(&dir) else {
            return Vec::new();
        };

        let mut backups: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p != &self.path)
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| {
                        n.starts_with(&prefix) && (n.ends_with(&ext) || n.ends_with(&gz_ext))
                    })
            })
            .collect();
        backups.sort();
        backups
    }

    /// Delete backups last modified before the retention window
    fn remove_expired_backups(&self) {
        let Some(max_age) = self.policy.max_age() else {
            return;
        };
        let Some(cutoff) = SystemTime::now().checked_sub(max_age) else {
            return;
        };

        for backup in self.backups() {
            let expired = fs::metadata(&backup)
                .and_then(|m| m.modified())
                .is_ok_and(|modified| modified < cutoff);
            if expired {
                if let Err(e) = fs::remove_file(&backup) {
                    eprintln!(
                        "[WARN] Failed to remove expired backup {}: {}",
                        backup.display(),
                        e
                    );
                }
            }
        }
    }

    /// Compress a backup using streaming I/O, removing the original only
    /// after the compressed copy is complete
    fn compress_file(&self, path: &Path) -> Result<()> {
        use std::io::{BufReader, BufWriter};

        let gz = gz_path(path);
        let temp_gz = path.with_extension("gz.tmp");

        let input = File::open(path).map_err(|e| LoggerError::file("open backup", path, e))?;
        let mut reader = BufReader::with_capacity(64 * 1024, input);

        let output =
            File::create(&temp_gz).map_err(|e| LoggerError::file("create", &temp_gz, e))?;
        let mut encoder = flate2::write::GzEncoder::new(
            BufWriter::with_capacity(64 * 1024, output),
            flate2::Compression::default(),
        );

        let copied = std::io::copy(&mut reader, &mut encoder)
            .and_then(|_| encoder.finish())
            .and_then(|mut w| w.flush());
        if let Err(e) = copied {
            let _ = fs::remove_file(&temp_gz);
            return Err(LoggerError::file("compress", path, e));
        }

        fs::rename(&temp_gz, &gz).map_err(|e| {
            let _ = fs::remove_file(&temp_gz);
            LoggerError::file("rename compressed backup to", &gz, e)
        })?;

        if let Err(e) = fs::remove_file(path) {
            eprintln!(
                "[WARN] Compression succeeded but failed to remove original file {}: {}",
                path.display(),
                e
            );
        }

        Ok(())
    }

    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

fn gz_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".gz");
    PathBuf::from(name)
}

impl Appender for RotatingFileAppender {
    fn append(&mut self, entry: &LogEntry, fields: Option<&LogContext>) -> Result<()> {
        if self.file.is_none() {
            self.open()?;
        }

        let mut formatted =
            self.output_format
                .format(entry, fields, &self.timestamp_format, false);
        formatted.push('\n');
        let bytes = formatted.len() as u64;

        if self.should_rotate(bytes) {
            if let Err(e) = self.rotate() {
                eprintln!(
                    "[WARN] Log rotation failed: {}. Continuing with current file.",
                    e
                );
                if self.file.is_none() {
                    self.open()?;
                }
                // Let the file grow past the bound instead of retrying every write
                self.current_size = 0;
            }
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| LoggerError::other("log file is not open"))?;
        file.write_all(formatted.as_bytes())
            .map_err(|e| LoggerError::file("write", &self.path, e))?;
        self.current_size += bytes;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut file) = self.file {
            file.flush()
                .map_err(|e| LoggerError::file("flush", &self.path, e))?;
        }
        Ok(())
    }
}
