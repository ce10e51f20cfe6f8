// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.

use std::time::Duration;

use tb_core::{BudgetConfig, ConfigError};
use thiserror::Error;

/// Construction-time failures that prevent the daemon from starting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DaemonConfigError {
    #[error(transparent)]
    Budget(#[from] ConfigError),
    #[error("invalid value for {var}: {value:?}")]
    InvalidEnvValue { var: &'static str, value: String },
}

const VAR_LIMIT: &str = "TB_BUDGET_LIMIT";
const VAR_REAPER_INTERVAL_MS: &str = "TB_REAPER_INTERVAL_MS";
const VAR_SHUTDOWN_GRACE_MS: &str = "TB_SHUTDOWN_GRACE_MS";

const DEFAULT_LIMIT: u64 = 32;

/// Load the budget configuration from the process environment.
///
/// Each variable has a single documented override name and is parsed with a
/// typed error on failure; a default applies only when the variable is
/// entirely absent. An empty or malformed value is a hard error, never a
/// silent fallback.
pub fn load() -> Result<BudgetConfig, DaemonConfigError> {
    let limit = parse_env_u64(VAR_LIMIT, DEFAULT_LIMIT)?;
    let reaper_interval = parse_env_duration_ms(
        VAR_REAPER_INTERVAL_MS,
        BudgetConfig::DEFAULT_REAPER_INTERVAL_MS,
    )?;
    let shutdown_grace = parse_env_duration_ms(
        VAR_SHUTDOWN_GRACE_MS,
        BudgetConfig::DEFAULT_SHUTDOWN_GRACE_MS,
    )?;

    Ok(BudgetConfig::new(limit, reaper_interval, shutdown_grace)?)
}

fn parse_env_u64(var: &'static str, default: u64) -> Result<u64, DaemonConfigError> {
    match std::env::var(var) {
        Err(_) => Ok(default),
        Ok(value) => value
            .parse::<u64>()
            .map_err(|_| DaemonConfigError::InvalidEnvValue { var, value }),
    }
}

fn parse_env_duration_ms(var: &'static str, default_ms: u64) -> Result<Duration, DaemonConfigError> {
    parse_env_u64(var, default_ms).map(Duration::from_millis)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
