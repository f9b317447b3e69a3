// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `coordinator.rs`

use super::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

#[tokio::test(flavor = "multi_thread")]
async fn test_same_scope_writes_never_overlap() {
    let coordinator = Arc::new(MutationCoordinator::new());
    let active = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let coordinator = Arc::clone(&coordinator);
        let active = Arc::clone(&active);
        let peak = Arc::clone(&peak);
        handles.push(tokio::spawn(async move {
            let _guard = coordinator.acquire(WriteScope::Records, false).await;
            let now = active.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            active.fetch_sub(1, Ordering::SeqCst);
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(peak.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_different_scopes_may_overlap() {
    let coordinator = MutationCoordinator::new();

    let _records_guard = coordinator.acquire(WriteScope::Records, false).await;

    // Zones scope must still be acquirable while Records is held.
    let zones_guard = timeout(
        Duration::from_millis(100),
        coordinator.acquire(WriteScope::Zones, false),
    )
    .await
    .expect("zones scope blocked behind records scope");
    assert!(zones_guard.is_some());
}

#[tokio::test]
async fn test_skip_lock_bypasses_a_held_scope() {
    let coordinator = MutationCoordinator::new();

    let held = coordinator.acquire(WriteScope::Records, false).await;
    assert!(held.is_some());

    // Opting out returns immediately with no guard even while held.
    let bypassed = timeout(
        Duration::from_millis(100),
        coordinator.acquire(WriteScope::Records, true),
    )
    .await
    .expect("skip_lock waited on the lock");
    assert!(bypassed.is_none());
}

#[tokio::test]
async fn test_guard_drop_releases_scope() {
    let coordinator = MutationCoordinator::new();

    {
        let _guard = coordinator.acquire(WriteScope::Zones, false).await;
    }

    let reacquired = timeout(
        Duration::from_millis(100),
        coordinator.acquire(WriteScope::Zones, false),
    )
    .await
    .expect("scope not released on guard drop");
    assert!(reacquired.is_some());
}
