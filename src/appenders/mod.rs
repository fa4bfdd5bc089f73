//! Appender implementations

pub mod console;
pub mod rotating_file;

pub use console::ConsoleAppender;
pub use rotating_file::{
    RotatingFileAppender, RotationPolicy, DEFAULT_MAX_AGE_DAYS, DEFAULT_MAX_SIZE_MB,
};

// Re-export trait for convenience
pub use crate::core::Appender;
