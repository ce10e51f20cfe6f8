// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op logger port.

use async_trait::async_trait;
use tb_core::{LogLevel, LoggerPort, PortError};

/// Logger port that silently discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LoggerPort for NoOpLogger {
    async fn log(&self, _level: LogLevel, _message: &str) -> Result<(), PortError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
