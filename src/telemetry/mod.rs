//! Telemetry
//!
//! Structured logging for sign-in operations. Failures are never logged
//! here; the only producer is the deprecation warnings emitted while
//! normalizing a sign-in configuration.

pub mod logging;

pub use logging::{
    create_console_logger, create_in_memory_logger, ConsoleLogger, InMemoryLogger, LogContext,
    LogEntry, LogLevel, Logger, NoOpLogger, TracingLogger,
};
