// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tb_adapters::FakeLogger;
use tb_core::TaskIdGen;

fn gate(limit: u64, logger: FakeLogger) -> AdmissionGate<FakeLogger> {
    AdmissionGate::new(
        Arc::new(LiveSet::new()),
        TaskIdGen::new(),
        logger,
        limit,
        Arc::new(AtomicBool::new(true)),
    )
}

#[tokio::test]
async fn accepts_up_to_limit_then_rejects_and_logs() {
    let logger = FakeLogger::new();
    let gate = gate(2, logger.clone());

    let a = gate.try_run(|_| async {}).await;
    let b = gate.try_run(|_| async {}).await;
    let c = gate.try_run(|_| async {}).await;

    assert!(a.is_accepted());
    assert!(b.is_accepted());
    assert!(!c.is_accepted());
    assert_eq!(logger.out_of_budget_count(), 1);
}

#[tokio::test]
async fn accepted_ids_are_distinct() {
    let logger = FakeLogger::new();
    let gate = gate(5, logger);

    let Admission::Accepted(a) = gate.try_run(|_| async {}).await else {
        panic!("expected acceptance");
    };
    let Admission::Accepted(b) = gate.try_run(|_| async {}).await else {
        panic!("expected acceptance");
    };
    assert_ne!(a, b);
}

#[tokio::test]
async fn rejects_without_logging_once_not_accepting() {
    let logger = FakeLogger::new();
    let live = Arc::new(LiveSet::new());
    let accepting = Arc::new(AtomicBool::new(true));
    let gate = AdmissionGate::new(
        live,
        TaskIdGen::new(),
        logger.clone(),
        5,
        accepting.clone(),
    );

    accepting.store(false, Ordering::Release);
    let outcome = gate.try_run(|_| async {}).await;

    assert!(!outcome.is_accepted());
    assert_eq!(logger.out_of_budget_count(), 0);
}

#[tokio::test]
async fn accepted_body_actually_runs_and_frees_its_slot() {
    let logger = FakeLogger::new();
    let live = Arc::new(LiveSet::new());
    let gate = AdmissionGate::new(
        live.clone(),
        TaskIdGen::new(),
        logger,
        1,
        Arc::new(AtomicBool::new(true)),
    );

    gate.try_run(|_token| async {
        tokio::time::sleep(Duration::from_millis(5)).await;
    })
    .await;

    assert_eq!(live.size(), 1);
    tokio::time::sleep(Duration::from_millis(30)).await;
    assert_eq!(live.size(), 0);
}
