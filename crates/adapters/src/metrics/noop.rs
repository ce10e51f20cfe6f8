// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op metrics port.

use async_trait::async_trait;
use tb_core::{MetricsPort, MetricsPortError};

/// Metrics port that silently discards every gauge update.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpMetrics;

impl NoOpMetrics {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetricsPort for NoOpMetrics {
    async fn gauge(&self, _name: &str, _value: i64) -> Result<(), MetricsPortError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
