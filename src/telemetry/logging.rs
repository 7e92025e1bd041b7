//! Logging
//!
//! Structured logging for sign-in operations. The module itself logs
//! nothing on failures; its only producer is the advisory deprecation
//! warnings emitted during request normalization.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Sign-in log context.
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    /// Provider name.
    pub provider: Option<String>,
    /// Operation name.
    pub operation: Option<String>,
    /// Client ID.
    pub client_id: Option<String>,
    /// Additional context.
    pub extra: HashMap<String, String>,
}

impl LogContext {
    /// Create new log context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set provider.
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Set operation.
    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Set client ID.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Add extra context.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Logger interface.
pub trait Logger: Send + Sync {
    /// Log at debug level.
    fn debug(&self, message: &str, context: &LogContext);

    /// Log at info level.
    fn info(&self, message: &str, context: &LogContext);

    /// Log at warn level.
    fn warn(&self, message: &str, context: &LogContext);

    /// Log at error level.
    fn error(&self, message: &str, context: &LogContext);

    /// Check if a log level is enabled.
    fn is_enabled(&self, level: LogLevel) -> bool;
}

/// No-op logger implementation.
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    fn debug(&self, _message: &str, _context: &LogContext) {}
    fn info(&self, _message: &str, _context: &LogContext) {}
    fn warn(&self, _message: &str, _context: &LogContext) {}
    fn error(&self, _message: &str, _context: &LogContext) {}
    fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

/// Log entry for in-memory storage.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub context: LogContext,
    pub timestamp: u64,
}

/// In-memory logger for testing.
pub struct InMemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
    min_level: LogLevel,
}

impl InMemoryLogger {
    /// Create new in-memory logger.
    pub fn new() -> Self {
        Self::with_level(LogLevel::Debug)
    }

    /// Create in-memory logger with minimum level.
    pub fn with_level(min_level: LogLevel) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            min_level,
        }
    }

    /// Get all log entries.
    pub fn get_entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Get entries by level.
    pub fn get_entries_by_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    fn log(&self, level: LogLevel, message: &str, context: &LogContext) {
        if level >= self.min_level {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64;

            self.entries.lock().unwrap().push(LogEntry {
                level,
                message: message.to_string(),
                context: context.clone(),
                timestamp: now,
            });
        }
    }
}

impl Default for InMemoryLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for InMemoryLogger {
    fn debug(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Debug, message, context);
    }

    fn info(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Info, message, context);
    }

    fn warn(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Warn, message, context);
    }

    fn error(&self, message: &str, context: &LogContext) {
        self.log(LogLevel::Error, message, context);
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

/// Console logger implementation.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    /// Create new console logger.
    pub fn new() -> Self {
        Self::with_level(LogLevel::Info)
    }

    /// Create console logger with minimum level.
    pub fn with_level(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    fn format_log(&self, level: LogLevel, message: &str, context: &LogContext) -> String {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let mut parts = vec![format!("[{}] {} {}", timestamp, level, message)];

        if let Some(provider) = &context.provider {
            parts.push(format!("provider={}", provider));
        }
        if let Some(operation) = &context.operation {
            parts.push(format!("operation={}", operation));
        }
        for (key, value) in &context.extra {
            parts.push(format!("{}={}", key, value));
        }

        parts.join(" ")
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str, context: &LogContext) {
        if self.is_enabled(LogLevel::Debug) {
            println!("{}", self.format_log(LogLevel::Debug, message, context));
        }
    }

    fn info(&self, message: &str, context: &LogContext) {
        if self.is_enabled(LogLevel::Info) {
            println!("{}", self.format_log(LogLevel::Info, message, context));
        }
    }

    fn warn(&self, message: &str, context: &LogContext) {
        if self.is_enabled(LogLevel::Warn) {
            eprintln!("{}", self.format_log(LogLevel::Warn, message, context));
        }
    }

    fn error(&self, message: &str, context: &LogContext) {
        if self.is_enabled(LogLevel::Error) {
            eprintln!("{}", self.format_log(LogLevel::Error, message, context));
        }
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

/// Logger forwarding to the `tracing` ecosystem.
pub struct TracingLogger;

impl TracingLogger {
    /// Create new tracing logger.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str, context: &LogContext) {
        tracing::debug!(
            provider = context.provider.as_deref(),
            operation = context.operation.as_deref(),
            "{message}"
        );
    }

    fn info(&self, message: &str, context: &LogContext) {
        tracing::info!(
            provider = context.provider.as_deref(),
            operation = context.operation.as_deref(),
            "{message}"
        );
    }

    fn warn(&self, message: &str, context: &LogContext) {
        tracing::warn!(
            provider = context.provider.as_deref(),
            operation = context.operation.as_deref(),
            "{message}"
        );
    }

    fn error(&self, message: &str, context: &LogContext) {
        tracing::error!(
            provider = context.provider.as_deref(),
            operation = context.operation.as_deref(),
            "{message}"
        );
    }

    fn is_enabled(&self, _level: LogLevel) -> bool {
        true
    }
}

/// Create in-memory logger for testing.
pub fn create_in_memory_logger() -> InMemoryLogger {
    InMemoryLogger::new()
}

/// Create console logger.
pub fn create_console_logger() -> ConsoleLogger {
    ConsoleLogger::new()
}
