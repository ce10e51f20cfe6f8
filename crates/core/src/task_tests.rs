// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn ids_are_monotonic_and_not_reused() {
    let gen = TaskIdGen::new();
    let a = gen.next_id();
    let b = gen.next_id();
    let c = gen.next_id();
    assert!(a.get() < b.get());
    assert!(b.get() < c.get());
}

#[test]
fn cloned_gen_shares_the_counter() {
    let gen = TaskIdGen::new();
    let cloned = gen.clone();
    let a = gen.next_id();
    let b = cloned.next_id();
    assert_ne!(a, b);
}

#[test]
fn handle_starts_not_done() {
    let handle = TaskHandle::new(TaskIdGen::new().next_id());
    assert!(!handle.is_done());
}

#[test]
fn mark_done_is_idempotent() {
    let handle = TaskHandle::new(TaskIdGen::new().next_id());
    handle.mark_done();
    handle.mark_done();
    assert!(handle.is_done());
}

#[test]
fn cancel_is_idempotent_and_observable_via_token() {
    let handle = TaskHandle::new(TaskIdGen::new().next_id());
    let token = handle.cancellation_token();
    assert!(!token.is_cancelled());
    handle.cancel();
    handle.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn cloned_handle_shares_done_flag() {
    let handle = TaskHandle::new(TaskIdGen::new().next_id());
    let clone = handle.clone();
    clone.mark_done();
    assert!(handle.is_done());
}
