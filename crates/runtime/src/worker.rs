// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker Runner: spawns an accepted task body, detached, and guarantees
//! its handle is removed from the Live Set on every termination path.

use std::future::Future;
use std::sync::Arc;

use tb_core::{TaskHandle, TaskId};
use tokio_util::sync::CancellationToken;

use crate::live_set::LiveSet;

/// Removes `id` from the Live Set and flips `done` when dropped.
///
/// Held across `body.await` so the removal runs on every termination path
/// — return, early-exit after observing cancellation, or panic unwinding
/// through this frame — without requiring `body` to return a `Result`.
struct RemovalGuard {
    id: TaskId,
    handle: TaskHandle,
    live: Arc<LiveSet>,
}

impl Drop for RemovalGuard {
    fn drop(&mut self) {
        self.handle.mark_done();
        self.live.remove(self.id);
    }
}

/// Spawn `body` detached from the caller. `body` receives a clone of the
/// handle's cancellation token and is responsible for observing it at its
/// own suspension points; this runner never force-drops the body future on
/// cancellation, since a task that ignores the signal must keep occupying
/// its slot until it returns on its own.
pub(crate) fn spawn_worker<F, Fut>(handle: TaskHandle, live: Arc<LiveSet>, body: F)
where
    F: FnOnce(CancellationToken) -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let token = handle.cancellation_token();
    let id = handle.id();
    tokio::spawn(async move {
        let _guard = RemovalGuard { id, handle, live };
        body(token).await;
    });
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod tests;
