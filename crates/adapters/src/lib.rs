// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Production and test-support implementations of the `LoggerPort` and
//! `MetricsPort` ports defined in `tb-core`.

pub mod log;
pub mod metrics;

pub use log::{NoOpLogger, TracingLogger};
pub use metrics::{NoOpMetrics, TracingMetrics};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use log::{FakeLogger, LoggedCall};
#[cfg(any(test, feature = "test-support"))]
pub use metrics::{FakeMetrics, GaugeCall};
