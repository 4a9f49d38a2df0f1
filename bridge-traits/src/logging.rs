//! Logging Abstractions
//!
//! Structured log entries and the sink trait used to mirror `tracing` events
//! into host logging pipelines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{BridgeError, Result};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Structured log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Target module/component
    pub target: String,
    /// Log message
    pub message: String,
    /// Structured fields
    pub fields: HashMap<String, String>,
    /// Name of the span the event was recorded in
    pub span_id: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp: Utc::now(),
            target: target.into(),
            message: message.into(),
            fields: HashMap::new(),
            span_id: None,
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_span_id(mut self, span_id: impl Into<String>) -> Self {
        self.span_id = Some(span_id.into());
        self
    }
}

/// Logger sink trait
///
/// Receives every event that survives filtering. On the web this is typically
/// an in-page diagnostics panel or a forwarder to the host's own logger.
///
/// Sinks are installed into the global `tracing` subscriber, which must be
/// `Send + Sync`, so sinks are too.
///
/// # Example
///
/// ```
/// use bridge_traits::logging::{LogEntry, LogLevel, LoggerSink, MemoryLogger};
///
/// let sink = MemoryLogger::new(LogLevel::Debug);
/// sink.log(LogEntry::new(LogLevel::Warn, "player", "slow start")).unwrap();
/// assert_eq!(sink.entries().len(), 1);
/// ```
pub trait LoggerSink: Send + Sync {
    /// Forward a log entry to the host logging system
    fn log(&self, entry: LogEntry) -> Result<()>;

    /// Get the minimum log level that will be processed
    fn min_level(&self) -> LogLevel {
        LogLevel::Info
    }
}

/// Sink that keeps entries in memory.
#[derive(Debug)]
pub struct MemoryLogger {
    min_level: LogLevel,
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self {
            min_level,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Copy of everything recorded so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Entries at `level` or above.
    pub fn entries_at_least(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.level >= level)
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new(LogLevel::Trace)
    }
}

impl LoggerSink for MemoryLogger {
    fn log(&self, entry: LogEntry) -> Result<()> {
        self.entries
            .lock()
            .map_err(|_| BridgeError::OperationFailed("memory logger poisoned".into()))?
            .push(entry);
        Ok(())
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_builder() {
        let entry = LogEntry::new(LogLevel::Info, "test", "Test message")
            .with_field("volume", "0.5")
            .with_span_id("toggle");

        assert_eq!(entry.level, LogLevel::Info);
        assert_eq!(entry.target, "test");
        assert_eq!(entry.message, "Test message");
        assert_eq!(entry.fields.get("volume"), Some(&"0.5".to_string()));
        assert_eq!(entry.span_id, Some("toggle".to_string()));
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_memory_logger_filters_by_level() {
        let logger = MemoryLogger::default();
        logger
            .log(LogEntry::new(LogLevel::Debug, "player", "synced"))
            .unwrap();
        logger
            .log(LogEntry::new(LogLevel::Error, "player", "decode failed"))
            .unwrap();

        assert_eq!(logger.entries().len(), 2);
        let errors = logger.entries_at_least(LogLevel::Warn);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "decode failed");

        logger.clear();
        assert!(logger.entries().is_empty());
    }
}
