// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admission Gate: the single critical section deciding whether a new task
//! may run.

use std::future::Future;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tb_core::{LogLevel, LoggerPort, TaskHandle, TaskId, TaskIdGen};
use tokio_util::sync::CancellationToken;

use crate::live_set::{LiveSet, RejectReason};
use crate::worker::spawn_worker;

/// Outcome of presenting a task body to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted(TaskId),
    Rejected,
}

impl Admission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Admission::Accepted(_))
    }
}

pub(crate) struct AdmissionGate<L: LoggerPort> {
    live: Arc<LiveSet>,
    id_gen: TaskIdGen,
    logger: L,
    limit: u64,
    accepting: Arc<AtomicBool>,
}

impl<L: LoggerPort> AdmissionGate<L> {
    pub(crate) fn new(
        live: Arc<LiveSet>,
        id_gen: TaskIdGen,
        logger: L,
        limit: u64,
        accepting: Arc<AtomicBool>,
    ) -> Self {
        Self {
            live,
            id_gen,
            logger,
            limit,
            accepting,
        }
    }

    /// Decide whether `body` may run. The accepting flag, capacity check,
    /// and handle registration all happen under a single lock (see
    /// `LiveSet::try_insert_with`), so a `shutdown()` racing this call can
    /// never admit a task it fails to cancel; the spawn itself, and any
    /// logging, happen after that lock is released.
    pub(crate) async fn try_run<F, Fut>(&self, body: F) -> Admission
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let id_gen = self.id_gen.clone();
        let admitted =
            self.live
                .try_insert_with(self.limit, &self.accepting, || {
                    TaskHandle::new(id_gen.next_id())
                });

        match admitted {
            Err(RejectReason::NotAccepting) => {
                // Shutdown race: rejected without a log record, per spec.
                Admission::Rejected
            }
            Err(RejectReason::OverBudget) => {
                if let Err(err) = self.logger.log(LogLevel::Info, "out of budget").await {
                    tracing::warn!(error = %err, "admission gate: logger port failed");
                }
                Admission::Rejected
            }
            Ok(handle) => {
                let id = handle.id();
                let _ = self
                    .logger
                    .log(LogLevel::Debug, &format!("admitted {id}"))
                    .await;
                spawn_worker(handle, self.live.clone(), body);
                Admission::Accepted(id)
            }
        }
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
