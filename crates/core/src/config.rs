// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Budget configuration: the values the Admission Gate and Reaper are
//! parameterized by.

use std::time::Duration;

use thiserror::Error;

/// Errors loading or validating a `BudgetConfig`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("limit must be >= 1, got {0}")]
    LimitTooLow(u64),
    #[error("reaper_interval must be > 0")]
    ZeroReaperInterval,
    #[error("shutdown_grace must be > 0")]
    ZeroShutdownGrace,
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnvValue { var: &'static str, value: String },
}

/// Maximum live tasks, reaper cadence, and shutdown grace period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetConfig {
    pub limit: u64,
    pub reaper_interval: Duration,
    pub shutdown_grace: Duration,
}

impl BudgetConfig {
    pub const DEFAULT_REAPER_INTERVAL_MS: u64 = 1000;
    pub const DEFAULT_SHUTDOWN_GRACE_MS: u64 = 2000;

    /// Construct and validate a `BudgetConfig`.
    pub fn new(
        limit: u64,
        reaper_interval: Duration,
        shutdown_grace: Duration,
    ) -> Result<Self, ConfigError> {
        if limit < 1 {
            return Err(ConfigError::LimitTooLow(limit));
        }
        if reaper_interval.is_zero() {
            return Err(ConfigError::ZeroReaperInterval);
        }
        if shutdown_grace.is_zero() {
            return Err(ConfigError::ZeroShutdownGrace);
        }
        Ok(Self {
            limit,
            reaper_interval,
            shutdown_grace,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
