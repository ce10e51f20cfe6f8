// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task identity and the bookkeeping handle owned by the live set.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// Unique, process-lifetime identifier for an admitted task.
///
/// Never reused: allocated from a monotonically increasing counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// Generates task ids from a shared counter. Cloning shares the counter.
#[derive(Clone, Default)]
pub struct TaskIdGen {
    next: Arc<AtomicU64>,
}

impl TaskIdGen {
    pub fn new() -> Self {
        Self {
            next: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn next_id(&self) -> TaskId {
        TaskId(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

/// Bookkeeping record owning the cancel signal and the done flag for one
/// accepted task.
///
/// `cancel` is idempotent (backed by a `CancellationToken`); `done` flips
/// exactly once, when the task body returns by any path.
#[derive(Clone, Debug)]
pub struct TaskHandle {
    id: TaskId,
    cancel: CancellationToken,
    done: Arc<AtomicBool>,
}

impl TaskHandle {
    /// Create a new, not-yet-done handle for `id`.
    pub fn new(id: TaskId) -> Self {
        Self {
            id,
            cancel: CancellationToken::new(),
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Request the task to stop. Safe to call more than once.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A clone of the cancellation token, to be observed by the task body.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Whether the task body has returned.
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Acquire)
    }

    /// Flip `done`. Idempotent: later calls are no-ops.
    pub fn mark_done(&self) {
        self.done.store(true, Ordering::Release);
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
