// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! MetricsPort implementations.

mod noop;
mod tracing_metrics;

pub use noop::NoOpMetrics;
pub use tracing_metrics::TracingMetrics;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeMetrics, GaugeCall};
