// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Metrics port: the sink the Reaper publishes the live-task gauge through.

use async_trait::async_trait;
use thiserror::Error;

/// Name of the gauge the Reaper publishes on every tick.
pub const LIVE_GAUGE: &str = "thread_budget.live";

/// A Metrics port failure. Caught and suppressed at the call site — it must
/// never affect `live` bookkeeping or the limit invariant.
#[derive(Debug, Error)]
pub enum MetricsPortError {
    #[error("metrics port failed: {0}")]
    Failed(String),
}

/// Abstract gauge/counter sink.
#[async_trait]
pub trait MetricsPort: Clone + Send + Sync + 'static {
    async fn gauge(&self, name: &str, value: i64) -> Result<(), MetricsPortError>;
}
