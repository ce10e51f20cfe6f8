// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::sync::atomic::AtomicBool;
use std::time::Duration;
use tb_core::TaskIdGen;

fn accepting() -> AtomicBool {
    AtomicBool::new(true)
}

#[tokio::test]
async fn normal_completion_removes_handle_and_marks_done() {
    let live = Arc::new(LiveSet::new());
    let gen = TaskIdGen::new();
    let handle = live
        .try_insert_with(5, &accepting(), || TaskHandle::new(gen.next_id()))
        .unwrap();
    let observed = handle.clone();

    spawn_worker(handle, live.clone(), |_token| async {});

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(observed.is_done());
    assert_eq!(live.size(), 0);
}

#[tokio::test]
async fn panic_in_body_still_removes_handle() {
    let live = Arc::new(LiveSet::new());
    let gen = TaskIdGen::new();
    let handle = live
        .try_insert_with(5, &accepting(), || TaskHandle::new(gen.next_id()))
        .unwrap();
    let observed = handle.clone();

    spawn_worker(handle, live.clone(), |_token| async {
        panic!("boom");
    });

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(observed.is_done());
    assert_eq!(live.size(), 0);
}

#[tokio::test]
async fn body_that_ignores_cancellation_keeps_its_slot_until_it_returns() {
    let live = Arc::new(LiveSet::new());
    let gen = TaskIdGen::new();
    let handle = live
        .try_insert_with(5, &accepting(), || TaskHandle::new(gen.next_id()))
        .unwrap();
    let observed = handle.clone();
    let cancel = handle.clone();

    spawn_worker(handle, live.clone(), |_token| async {
        tokio::time::sleep(Duration::from_millis(40)).await;
    });

    cancel.cancel();
    tokio::time::sleep(Duration::from_millis(10)).await;
    // Body never checked the token, so it is still occupying its slot.
    assert!(!observed.is_done());
    assert_eq!(live.size(), 1);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(observed.is_done());
    assert_eq!(live.size(), 0);
}

#[tokio::test]
async fn body_that_observes_cancellation_returns_early() {
    let live = Arc::new(LiveSet::new());
    let gen = TaskIdGen::new();
    let handle = live
        .try_insert_with(5, &accepting(), || TaskHandle::new(gen.next_id()))
        .unwrap();
    let observed = handle.clone();
    let cancel = handle.clone();

    spawn_worker(handle, live.clone(), |token| async move {
        tokio::select! {
            _ = token.cancelled() => {}
            _ = tokio::time::sleep(Duration::from_secs(10)) => {}
        }
    });

    cancel.cancel();
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(observed.is_done());
    assert_eq!(live.size(), 0);
}
