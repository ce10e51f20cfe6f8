// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thread budget daemon library
//!
//! Exposes configuration loading and logging setup for the `tbd` binary.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod config;
pub mod logging;

pub use config::{load as load_config, DaemonConfigError};
pub use logging::{init_logging, LoggingError};
