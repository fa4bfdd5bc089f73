//! Error types for the logger system
//!
//! Logging calls never return these. They flow from appenders to the
//! pipeline, which counts and reports them, and out of configuration
//! loading, which is the only fallible step a caller sees.

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A file operation on a known path failed
    #[error("failed to {operation} '{}': {source}", .path.display())]
    File {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Moving the active file aside failed; the old file keeps growing
    #[error("rotation of '{}' failed: {source}", .path.display())]
    Rotation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A setting could not be turned into a logger
    #[error("invalid {setting}: {message}")]
    InvalidConfiguration { setting: String, message: String },

    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    pub fn file(operation: &'static str, path: &Path, source: io::Error) -> Self {
        LoggerError::File {
            operation,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn rotation(path: &Path, source: io::Error) -> Self {
        LoggerError::Rotation {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn config(setting: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            setting: setting.into(),
            message: message.into(),
        }
    }

    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// The file involved, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            LoggerError::File { path, .. } | LoggerError::Rotation { path, .. } => Some(path),
            _ => None,
        }
    }
}
