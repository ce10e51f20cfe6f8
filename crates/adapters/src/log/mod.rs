// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! LoggerPort implementations.

mod noop;
mod tracing_logger;

pub use noop::NoOpLogger;
pub use tracing_logger::TracingLogger;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeLogger, LoggedCall};
