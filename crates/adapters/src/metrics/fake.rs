// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake metrics port for testing.
#![cfg_attr(coverage_nightly, coverage(off))]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tb_core::{MetricsPort, MetricsPortError};

/// One recorded call to `gauge`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaugeCall {
    pub name: String,
    pub value: i64,
}

struct FakeMetricsState {
    calls: Vec<GaugeCall>,
}

/// Metrics port that records every gauge update for inspection by tests.
#[derive(Clone)]
pub struct FakeMetrics {
    inner: Arc<Mutex<FakeMetricsState>>,
}

impl Default for FakeMetrics {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeMetricsState { calls: Vec::new() })),
        }
    }
}

impl FakeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in the order they were made.
    pub fn calls(&self) -> Vec<GaugeCall> {
        self.inner.lock().calls.clone()
    }

    /// The most recently published value for `name`, if any.
    pub fn latest(&self, name: &str) -> Option<i64> {
        self.inner
            .lock()
            .calls
            .iter()
            .rev()
            .find(|c| c.name == name)
            .map(|c| c.value)
    }
}

#[async_trait]
impl MetricsPort for FakeMetrics {
    async fn gauge(&self, name: &str, value: i64) -> Result<(), MetricsPortError> {
        self.inner.lock().calls.push(GaugeCall {
            name: name.to_string(),
            value,
        });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
