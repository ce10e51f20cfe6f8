// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger port: the sink the Admission Gate and Reaper emit structured
//! records through.

use async_trait::async_trait;
use thiserror::Error;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
}

/// A single structured record, classified by level and content so callers
/// can count rejections without re-parsing message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogRecord {
    /// Diagnostic, not counted toward the rejection invariant.
    Debug(String),
    /// Emitted exactly once per rejected admission.
    OutOfBudget,
    /// Anything the port produces that falls outside the two classes above.
    Other(String),
}

impl LogRecord {
    /// Classify a `(level, message)` pair the way the Admission Gate emits
    /// it: `Debug` records are diagnostics, and an `Info` record is
    /// `OutOfBudget` iff its message is the gate's fixed rejection text.
    pub fn classify(level: LogLevel, message: &str) -> Self {
        match level {
            LogLevel::Debug => LogRecord::Debug(message.to_string()),
            LogLevel::Info if message == "out of budget" => LogRecord::OutOfBudget,
            LogLevel::Info => LogRecord::Other(message.to_string()),
        }
    }

    /// Render back to the text a logging backend should emit.
    pub fn as_text(&self) -> &str {
        match self {
            LogRecord::Debug(text) | LogRecord::Other(text) => text,
            LogRecord::OutOfBudget => "out of budget",
        }
    }
}

/// A Logger/Metrics port failure. Caught and suppressed at the call site —
/// it must never affect `live` bookkeeping or the limit invariant.
#[derive(Debug, Error)]
pub enum PortError {
    #[error("logger port failed: {0}")]
    Failed(String),
}

/// Abstract sink for structured log records.
#[async_trait]
pub trait LoggerPort: Clone + Send + Sync + 'static {
    async fn log(&self, level: LogLevel, message: &str) -> Result<(), PortError>;
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
