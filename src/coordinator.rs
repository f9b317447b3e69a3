// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Write serialization for zone-mutating API calls.
//!
//! The backend maintains a monotonically increasing serial number per zone
//! and rejects or misorders overlapping writes, so the client serializes its
//! own mutating calls. Two independent scopes exist:
//!
//! - [`WriteScope::Records`]: record and recordset create/update/delete
//! - [`WriteScope::Zones`]: zone create/update, changelist save/submit,
//!   zone-file upload
//!
//! A record write and a zone write may run concurrently; only writes within
//! the same scope serialize. Reads never touch either scope.
//!
//! The coordinator is an explicit object rather than process-global state:
//! [`crate::client::Client`] creates one per client by default, and tests or
//! multi-client setups can share a single instance via
//! [`crate::client::Client::with_coordinator`].
//!
//! Serialization is per coordinator, not per zone. That is coarser than the
//! backend's invariant strictly requires (the serial is per zone), and it is
//! a known scalability limit for callers mutating many zones at once.
//!
//! # Example
//!
//! ```rust,no_run
//! use edgedns::coordinator::{MutationCoordinator, WriteScope};
//!
//! # async fn example() {
//! let coordinator = MutationCoordinator::new();
//!
//! // Guard released when dropped, including on error paths.
//! let _guard = coordinator.acquire(WriteScope::Records, false).await;
//! // ... perform the mutating HTTP call ...
//! # }
//! ```

use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

/// The two independent mutual-exclusion regions for mutating calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteScope {
    /// Record and recordset writes
    Records,
    /// Zone-level writes (zone create/update, changelist operations)
    Zones,
}

/// Serializes mutating API calls so the backend zone serial is never raced.
///
/// Holds one binary semaphore per [`WriteScope`]. Locks live as long as the
/// coordinator; nothing is persisted.
///
/// Known limitation: a caller waiting to acquire a scope is not responsive
/// to request cancellation until the lock is obtained.
#[derive(Debug, Default)]
pub struct MutationCoordinator {
    records: Mutex<()>,
    zones: Mutex<()>,
}

impl MutationCoordinator {
    /// Create a coordinator with both scopes free.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for `scope`, unless the caller opted out.
    ///
    /// Returns `None` without blocking when `skip_lock` is `true`; the
    /// caller asserts write serialization is handled externally. Otherwise
    /// waits until the scope is free and returns a guard that releases the
    /// scope on drop, unconditionally including on error paths.
    pub async fn acquire(&self, scope: WriteScope, skip_lock: bool) -> Option<MutexGuard<'_, ()>> {
        if skip_lock {
            debug!(?scope, "write lock bypassed by caller");
            return None;
        }
        let guard = match scope {
            WriteScope::Records => self.records.lock().await,
            WriteScope::Zones => self.zones.lock().await,
        };
        Some(guard)
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod coordinator_tests;
