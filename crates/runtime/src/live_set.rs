// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live Set: the bounded collection of live task handles.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tb_core::{TaskHandle, TaskId};

/// Why an admission attempt did not produce a live handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The Live Set is already at `limit`.
    OverBudget,
    /// `accepting` was already false when the check ran.
    NotAccepting,
}

/// Tracks live task handles keyed by task id.
///
/// All operations take a single internal lock; `try_insert_with` holds it
/// across the accepting/capacity check and the insertion so both the limit
/// invariant and the shutdown-race guarantee hold under concurrent callers.
#[derive(Default)]
pub struct LiveSet {
    handles: Mutex<HashMap<TaskId, TaskHandle>>,
}

impl LiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current live count.
    pub fn size(&self) -> usize {
        self.handles.lock().len()
    }

    /// Remove the entry if present. No-op (and safe to call repeatedly) if
    /// it has already been removed.
    pub fn remove(&self, id: TaskId) {
        self.handles.lock().remove(&id);
    }

    /// Consistent point-in-time view for iteration by the Reaper and by
    /// `cancel_all`.
    pub fn snapshot(&self) -> Vec<TaskHandle> {
        self.handles.lock().values().cloned().collect()
    }

    /// Invoke `cancel` on every live handle. Does not wait for them to
    /// finish.
    pub fn cancel_all(&self) {
        for handle in self.snapshot() {
            handle.cancel();
        }
    }

    /// Atomically: if `accepting` is true and `size() < limit`, call
    /// `make_handle` and insert the result; otherwise do nothing.
    /// `accepting` is read under the same lock as the insertion, so a
    /// `shutdown()` that flips it and then calls `cancel_all` can never
    /// miss a task admitted concurrently — the admission either completes
    /// (and is visible to `cancel_all`'s lock-protected snapshot) entirely
    /// before the flip, or observes the flip and is rejected.
    /// `make_handle` runs under the lock, so it must be cheap (id
    /// allocation only) and must not block.
    ///
    /// Returns the inserted handle on admission, the reason on rejection.
    pub fn try_insert_with<F>(
        &self,
        limit: u64,
        accepting: &AtomicBool,
        make_handle: F,
    ) -> Result<TaskHandle, RejectReason>
    where
        F: FnOnce() -> TaskHandle,
    {
        let mut handles = self.handles.lock();
        if !accepting.load(Ordering::Acquire) {
            return Err(RejectReason::NotAccepting);
        }
        if handles.len() as u64 >= limit {
            return Err(RejectReason::OverBudget);
        }
        let handle = make_handle();
        handles.insert(handle.id(), handle.clone());
        Ok(handle)
    }
}

#[cfg(test)]
#[path = "live_set_tests.rs"]
mod tests;
