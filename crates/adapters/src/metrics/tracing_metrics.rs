// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Metrics port backed by the process's structured tracing subscriber.
//!
//! No external metrics backend is in scope; gauges are rendered as
//! structured tracing events so they land in the same stream as everything
//! else the daemon logs.

use async_trait::async_trait;
use tb_core::{MetricsPort, MetricsPortError};

/// Renders gauge updates through `tracing` rather than a real metrics
/// backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingMetrics;

impl TracingMetrics {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetricsPort for TracingMetrics {
    async fn gauge(&self, name: &str, value: i64) -> Result<(), MetricsPortError> {
        tracing::info!(gauge = name, value, "metric");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tracing_metrics_tests.rs"]
mod tests;
