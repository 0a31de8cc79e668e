// Result loggers
//
// The logging capability consulted when outcome values are logged, with a
// tracing-backed default, a no-op logger and an in-memory capturing logger.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Severity of a logged outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Capability used to log outcome values.
///
/// Implementations are shared by every consumer of a settings snapshot and
/// must be safe to call from any thread.
pub trait ResultLogger: fmt::Debug + Send + Sync {
    /// Log a message produced in `context`
    fn log(&self, level: LogLevel, context: &str, message: &str);
}

/// Logger that forwards to `tracing`, dropping messages below `min_level`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultLogger {
    min_level: LogLevel,
}

impl DefaultLogger {
    pub fn new() -> Self {
        Self::with_level(LogLevel::default())
    }

    pub fn with_level(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultLogger for DefaultLogger {
    fn log(&self, level: LogLevel, context: &str, message: &str) {
        if level < self.min_level {
            return;
        }
        match level {
            LogLevel::Trace => tracing::trace!(target: "outcome::result", context, "{}", message),
            LogLevel::Debug => tracing::debug!(target: "outcome::result", context, "{}", message),
            LogLevel::Info => tracing::info!(target: "outcome::result", context, "{}", message),
            LogLevel::Warn => tracing::warn!(target: "outcome::result", context, "{}", message),
            LogLevel::Error => tracing::error!(target: "outcome::result", context, "{}", message),
        }
    }
}

/// Logger that discards everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopLogger;

impl ResultLogger for NoopLogger {
    fn log(&self, _level: LogLevel, _context: &str, _message: &str) {}
}

/// A single entry recorded by [`CapturingLogger`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub context: String,
    pub message: String,
}

/// Logger that keeps entries in memory for later inspection.
///
/// Clones share the same entry list.
#[derive(Debug, Clone, Default)]
pub struct CapturingLogger {
    entries: Arc<Mutex<Vec<LogRecord>>>,
}

impl CapturingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries recorded so far
    pub fn entries(&self) -> Vec<LogRecord> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Clear all entries
    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    /// Check if any entry message contains the specified text
    pub fn contains(&self, text: &str) -> bool {
        self.entries().iter().any(|entry| entry.message.contains(text))
    }
}

impl ResultLogger for CapturingLogger {
    fn log(&self, level: LogLevel, context: &str, message: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.push(LogRecord {
            level,
            context: context.to_string(),
            message: message.to_string(),
        });
    }
}
