// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Budget: the public facade tying the Live Set, Admission Gate, Worker
//! Runner, and Reaper into one handle.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tb_core::{BudgetConfig, Clock, LoggerPort, MetricsPort, TaskIdGen};
use tokio_util::sync::CancellationToken;

use crate::gate::{Admission, AdmissionGate};
use crate::live_set::LiveSet;
use crate::reaper::{start_reaper, ReaperHandle};

/// How often `shutdown` polls the Live Set while waiting for in-flight
/// tasks to drain.
const SHUTDOWN_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// A thread budget: accepts task bodies up to `config.limit` concurrently
/// live ones, and reaps stale bookkeeping in the background once
/// `start_reaper` has been called.
///
/// Cheap to clone is not provided directly; callers needing to share a
/// `Budget` across tasks should wrap it in an `Arc`, matching how the rest
/// of this workspace shares long-lived service state.
pub struct Budget<L: LoggerPort> {
    config: BudgetConfig,
    live: Arc<LiveSet>,
    gate: AdmissionGate<L>,
    accepting: Arc<AtomicBool>,
    reaper: Mutex<Option<ReaperHandle>>,
}

impl<L: LoggerPort> Budget<L> {
    /// Build a new budget. Does not start the reaper; call `start_reaper`
    /// separately once a metrics port and clock are available.
    pub fn new(config: BudgetConfig, logger: L) -> Self {
        let live = Arc::new(LiveSet::new());
        let accepting = Arc::new(AtomicBool::new(true));
        let gate = AdmissionGate::new(
            live.clone(),
            TaskIdGen::new(),
            logger,
            config.limit,
            accepting.clone(),
        );
        Self {
            config,
            live,
            gate,
            accepting,
            reaper: Mutex::new(None),
        }
    }

    /// Configured concurrency limit.
    pub fn limit(&self) -> u64 {
        self.config.limit
    }

    /// Present `body` to the Admission Gate. `body` receives a clone of its
    /// task's cancellation token; it is spawned detached on acceptance and
    /// is responsible for observing the token itself.
    pub async fn try_run<F, Fut>(&self, body: F) -> Admission
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.gate.try_run(body).await
    }

    /// Current live count.
    pub fn size(&self) -> usize {
        self.live.size()
    }

    /// Request cancellation of every currently live task. Does not wait for
    /// them to return.
    pub fn cancel_all(&self) {
        self.live.cancel_all();
    }

    /// Start the background Reaper. Replaces (and leaks the continued
    /// execution of) any previously started reaper without stopping it
    /// first; callers that care should `stop_reaper` before calling this
    /// again.
    pub fn start_reaper<M, C>(&self, metrics: M, clock: C)
    where
        M: MetricsPort,
        C: Clock,
    {
        let handle = start_reaper(self.live.clone(), self.config.reaper_interval, metrics, clock);
        *self.reaper.lock() = Some(handle);
    }

    /// Cancel the Reaper and wait for its loop to exit. Idempotent: a
    /// second call when no reaper is running is a no-op.
    pub async fn stop_reaper(&self) {
        let handle = self.reaper.lock().take();
        if let Some(handle) = handle {
            handle.stop().await;
        }
    }

    /// Stop accepting new tasks, cancel every live one, and wait up to
    /// `config.shutdown_grace` for them to drain. Idempotent: calling this
    /// more than once is safe, the second call finds nothing left to do.
    pub async fn shutdown(&self) {
        self.accepting.store(false, Ordering::Release);
        self.stop_reaper().await;
        self.live.cancel_all();

        let deadline = tokio::time::Instant::now() + self.config.shutdown_grace;
        while self.live.size() > 0 && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(SHUTDOWN_POLL_INTERVAL).await;
        }
    }
}

#[cfg(test)]
#[path = "budget_tests.rs"]
mod tests;
