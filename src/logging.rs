//! Logging capability injected into the queue.
//!
//! Fire-and-forget delivery and the poll loop never return errors to callers;
//! they report every failure through this capability instead. `TracingLog` is
//! the production adapter, `MemoryLog` captures entries for test assertions.

use std::sync::RwLock;

/// Log level used by the queue (only two levels are ever emitted)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        }
    }
}

/// A single captured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Leveled text logging capability
pub trait QueueLog: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Adapter forwarding to the `tracing` ecosystem
#[derive(Debug, Default)]
pub struct TracingLog;

impl QueueLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(target: "liteq", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "liteq", "{message}");
    }
}

/// In-memory capture appender for tests
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: RwLock<Vec<LogEntry>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured entries
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.read().map(|e| e.clone()).unwrap_or_default()
    }

    /// Get captured entries of one level
    pub fn entries_by_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .read()
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| entry.level == level)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Clear all captured entries
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    fn push(&self, level: LogLevel, message: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.push(LogEntry {
                level,
                message: message.to_string(),
            });
        }
    }
}

impl QueueLog for MemoryLog {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}
