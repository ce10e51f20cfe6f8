// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn second_init_is_a_configuration_error_not_a_panic() {
    let first = init_logging();
    let second = init_logging();

    assert!(first.is_ok() || matches!(first, Err(LoggingError::AlreadyInitialized)));
    assert_eq!(second.unwrap_err(), LoggingError::AlreadyInitialized);
}
