// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thread Budget Daemon (tbd)
//!
//! Admission-control layer for the notification push service: caps the
//! number of in-flight push-delivery tasks, reaps stale bookkeeping, and
//! shuts down cleanly on a termination signal.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

use std::time::Duration;

use tb_adapters::{TracingLogger, TracingMetrics};
use tb_core::SystemClock;
use tb_runtime::Budget;
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info, warn};

/// How long a single simulated push-delivery attempt takes to reach the
/// upstream APNs/FCM endpoint before it either succeeds or is cancelled.
const PUSH_DELIVERY_DURATION: Duration = Duration::from_secs(3);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = tb_daemon::load_config().map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        e
    })?;

    let log_guard = tb_daemon::init_logging()?;
    info!(
        limit = config.limit,
        reaper_interval_ms = config.reaper_interval.as_millis() as u64,
        shutdown_grace_ms = config.shutdown_grace.as_millis() as u64,
        "starting thread budget daemon"
    );

    let budget = Budget::new(config, TracingLogger);
    budget.start_reaper(TracingMetrics, SystemClock::new());

    // Demonstrate admission with a representative push-delivery task body.
    // A real caller would present one of these per outbound notification;
    // here a few are admitted at startup to exercise the gate end-to-end.
    for n in 0..3 {
        let outcome = budget
            .try_run(move |cancel| async move {
                tokio::select! {
                    _ = tokio::time::sleep(PUSH_DELIVERY_DURATION) => {
                        info!(delivery = n, "push delivery complete");
                    }
                    _ = cancel.cancelled() => {
                        warn!(delivery = n, "push delivery cancelled before completion");
                    }
                }
            })
            .await;
        info!(delivery = n, accepted = outcome.is_accepted(), "admitted push delivery");
    }

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::select! {
        _ = sigterm.recv() => info!("received SIGTERM, shutting down"),
        _ = sigint.recv() => info!("received SIGINT, shutting down"),
    }

    budget.shutdown().await;
    if budget.size() > 0 {
        error!(remaining = budget.size(), "shutdown grace period elapsed with tasks still live");
    }
    info!("thread budget daemon stopped");

    drop(log_guard);
    Ok(())
}
