// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tb-runtime: the admission-controlled concurrency core — Live Set,
//! Admission Gate, Worker Runner, and Reaper, composed behind the `Budget`
//! facade.

mod budget;
mod gate;
mod live_set;
mod reaper;
mod worker;

pub use budget::Budget;
pub use gate::Admission;
pub use live_set::{LiveSet, RejectReason};
pub use reaper::ReaperHandle;
