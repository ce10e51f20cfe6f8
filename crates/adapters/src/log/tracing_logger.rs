// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger port backed by the process's structured tracing subscriber.

use async_trait::async_trait;
use tb_core::{LogLevel, LogRecord, LoggerPort, PortError};

/// Renders log records through `tracing` rather than a bespoke sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LoggerPort for TracingLogger {
    async fn log(&self, level: LogLevel, message: &str) -> Result<(), PortError> {
        let record = LogRecord::classify(level, message);
        match level {
            LogLevel::Debug => tracing::debug!("{}", record.as_text()),
            LogLevel::Info => tracing::info!("{}", record.as_text()),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tracing_logger_tests.rs"]
mod tests;
