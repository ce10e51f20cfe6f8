// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock port: abstracts `now()`/`sleep()` so timing can be simulated under
//! `tokio::time::pause`/`advance` in tests instead of via real wall time.

use std::time::{Duration, Instant};

use async_trait::async_trait;

/// Abstract monotonic clock for periodic scheduling and for testability.
#[async_trait]
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> Instant;
    async fn sleep(&self, duration: Duration);
}

/// Production clock backed by tokio's runtime timer.
///
/// Tests that need determinism should pause the tokio clock
/// (`tokio::time::pause`) rather than reach for a bespoke simulated clock;
/// `SystemClock` observes the paused/advanced virtual time transparently.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Test clock that tracks a logical `now` advanced explicitly by the
    /// test, and whose `sleep` resolves against the real tokio timer so it
    /// composes with `tokio::time::pause`/`advance`.
    #[derive(Clone)]
    pub struct FakeClock {
        base: Instant,
        offset: Arc<Mutex<Duration>>,
    }

    impl FakeClock {
        pub fn new() -> Self {
            Self {
                base: Instant::now(),
                offset: Arc::new(Mutex::new(Duration::ZERO)),
            }
        }

        /// Advance the logical clock reported by `now()`.
        pub fn advance(&self, by: Duration) {
            *self.offset.lock() += by;
        }
    }

    impl Default for FakeClock {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl Clock for FakeClock {
        fn now(&self) -> Instant {
            self.base + *self.offset.lock()
        }

        async fn sleep(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
            self.advance(duration);
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeClock;

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
