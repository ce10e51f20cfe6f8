// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reaper: periodic defense-in-depth sweep of the Live Set.

use std::sync::Arc;
use std::time::Duration;

use tb_core::{Clock, MetricsPort, LIVE_GAUGE};
use tokio_util::sync::CancellationToken;

use crate::live_set::LiveSet;

/// Handle to a running reaper task. Dropping this without calling `stop`
/// leaves the reaper running; call `stop` to cancel it and wait for the
/// current tick (if any) to finish.
pub struct ReaperHandle {
    cancel: CancellationToken,
    join: tokio::task::JoinHandle<()>,
}

impl ReaperHandle {
    /// Cancel the reaper and wait for its loop to exit.
    pub async fn stop(self) {
        self.cancel.cancel();
        let _ = self.join.await;
    }
}

/// Start a background task that, every `interval`, removes Live Set
/// entries whose task has already terminated and publishes the live count
/// as a gauge. Survives transient metrics-port failures by reporting and
/// continuing rather than stopping the loop.
pub(crate) fn start_reaper<M, C>(live: Arc<LiveSet>, interval: Duration, metrics: M, clock: C) -> ReaperHandle
where
    M: MetricsPort,
    C: Clock,
{
    let cancel = CancellationToken::new();
    let cancel_for_task = cancel.clone();

    let join = tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;
                _ = cancel_for_task.cancelled() => break,
                _ = clock.sleep(interval) => {}
            }
            reap_once(&live, &metrics).await;
        }
    });

    ReaperHandle { cancel, join }
}

async fn reap_once<M: MetricsPort>(live: &LiveSet, metrics: &M) {
    for handle in live.snapshot() {
        if handle.is_done() {
            live.remove(handle.id());
        }
    }

    if let Err(err) = metrics.gauge(LIVE_GAUGE, live.size() as i64).await {
        tracing::warn!(error = %err, "reaper: metrics port failed, continuing");
    }
}

#[cfg(test)]
#[path = "reaper_tests.rs"]
mod tests;
