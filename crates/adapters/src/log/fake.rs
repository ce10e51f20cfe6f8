// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake logger port for testing.
#![cfg_attr(coverage_nightly, coverage(off))]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tb_core::{LogLevel, LogRecord, LoggerPort, PortError};

/// One recorded call to `log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedCall {
    pub level: LogLevel,
    pub message: String,
    pub record: LogRecord,
}

struct FakeLoggerState {
    calls: Vec<LoggedCall>,
}

/// Logger port that records every call for inspection by tests.
#[derive(Clone)]
pub struct FakeLogger {
    inner: Arc<Mutex<FakeLoggerState>>,
}

impl Default for FakeLogger {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeLoggerState { calls: Vec::new() })),
        }
    }
}

impl FakeLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in the order they were made.
    pub fn calls(&self) -> Vec<LoggedCall> {
        self.inner.lock().calls.clone()
    }

    /// Number of non-debug records, i.e. the count the rejection invariant
    /// is checked against.
    pub fn non_debug_count(&self) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| !matches!(c.record, LogRecord::Debug(_)))
            .count()
    }

    /// Number of records classified as `LogRecord::OutOfBudget`.
    pub fn out_of_budget_count(&self) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| matches!(c.record, LogRecord::OutOfBudget))
            .count()
    }
}

#[async_trait]
impl LoggerPort for FakeLogger {
    async fn log(&self, level: LogLevel, message: &str) -> Result<(), PortError> {
        self.inner.lock().calls.push(LoggedCall {
            level,
            message: message.to_string(),
            record: LogRecord::classify(level, message),
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
