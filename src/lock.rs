// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shareable mutual-exclusion handle that serializes every operation.
//!
//! A [`SharedLock`] is a cheap, cloneable handle to one underlying mutex.
//! Cloning shares the lock; the clone and the original serialize against
//! each other. That is the whole point: a caller can create one lock, hand
//! clones to several containers (or guard unrelated state of its own with
//! it), and get a single umbrella of mutual exclusion over all of them.
//!
//! No holder ever destroys the lock out from under the others. Dropping a
//! handle only drops that handle; the mutex lives until the last clone goes.
//!
//! The lock is **not reentrant**: a thread that holds a [`SharedLockGuard`]
//! and then calls an operation on a container using the same lock will
//! deadlock. Lock ordering across containers is the caller's problem, the
//! same as with any mutex.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

/// Handle to a mutual-exclusion primitive, shared by every clone.
///
/// Acquisition order among contending threads is whatever `parking_lot`
/// gives; no fairness is promised.
#[derive(Clone, Default)]
pub struct SharedLock {
    inner: Arc<Mutex<()>>,
}

impl SharedLock {
    /// Create a fresh lock with this handle as its only holder.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(())),
        }
    }

    /// Block until the lock is free, then hold it until the guard drops.
    pub fn lock(&self) -> SharedLockGuard<'_> {
        SharedLockGuard {
            _guard: self.inner.lock(),
        }
    }

    /// True if both handles share one underlying mutex.
    pub fn same_lock(&self, other: &SharedLock) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to this lock, this one included. Diagnostic
    /// only; the count can change the moment it is read.
    pub fn holders(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl fmt::Debug for SharedLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLock")
            .field("holders", &self.holders())
            .field("locked", &self.inner.is_locked())
            .finish()
    }
}

/// Scoped guard: the lock is held from acquisition until drop, on every
/// exit path including early-return failures.
pub struct SharedLockGuard<'a> {
    _guard: MutexGuard<'a, ()>,
}
