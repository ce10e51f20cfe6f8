// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide structured logging setup.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable controlling the log filter directive (default: `info`).
const LOG_FILTER_VAR: &str = "TB_LOG";

static INITIALIZED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggingError {
    #[error("logging has already been initialized for this process")]
    AlreadyInitialized,
}

/// Install the process-wide tracing subscriber. Non-blocking, filtered by
/// `TB_LOG` (default `info`). Must be called at most once per process; a
/// second call is a configuration error rather than a panic.
///
/// Returns a [`WorkerGuard`] that must be held for the lifetime of the
/// process — dropping it stops the background writer thread and silently
/// truncates buffered log lines.
pub fn init_logging() -> Result<WorkerGuard, LoggingError> {
    if INITIALIZED.swap(true, Ordering::AcqRel) {
        return Err(LoggingError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    Ok(guard)
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
