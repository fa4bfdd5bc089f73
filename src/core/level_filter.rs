//! Level acceptance policies for sinks

use super::log_level::LogLevel;
use std::fmt;

/// Decides which levels a sink writes.
///
/// The three families cover the routing a [`Config`](crate::Config) needs:
/// a plain threshold, a single-level route, and "everything below" for a
/// main file whose upper levels were routed elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFilter {
    /// Accepts `level >= threshold`
    AtLeast(LogLevel),
    /// Accepts only `level == target`
    Exactly(LogLevel),
    /// Accepts `level < bound`
    Below(LogLevel),
}

impl LevelFilter {
    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        match *self {
            LevelFilter::AtLeast(threshold) => level.at_least(threshold),
            LevelFilter::Exactly(target) => level.is(target),
            LevelFilter::Below(bound) => !level.at_least(bound),
        }
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        LevelFilter::AtLeast(LogLevel::Debug)
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelFilter::AtLeast(l) => write!(f, ">={}", l),
            LevelFilter::Exactly(l) => write!(f, "=={}", l),
            LevelFilter::Below(l) => write!(f, "<{}", l),
        }
    }
}
