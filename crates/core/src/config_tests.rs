// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn rejects_zero_limit() {
    let err = BudgetConfig::new(0, Duration::from_millis(10), Duration::from_millis(10))
        .unwrap_err();
    assert_eq!(err, ConfigError::LimitTooLow(0));
}

#[test]
fn rejects_zero_reaper_interval() {
    let err = BudgetConfig::new(5, Duration::ZERO, Duration::from_millis(10)).unwrap_err();
    assert_eq!(err, ConfigError::ZeroReaperInterval);
}

#[test]
fn rejects_zero_shutdown_grace() {
    let err = BudgetConfig::new(5, Duration::from_millis(10), Duration::ZERO).unwrap_err();
    assert_eq!(err, ConfigError::ZeroShutdownGrace);
}

#[test]
fn accepts_valid_config() {
    let cfg = BudgetConfig::new(5, Duration::from_millis(10), Duration::from_secs(2)).unwrap();
    assert_eq!(cfg.limit, 5);
}
