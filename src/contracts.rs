// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts on the hook layer.
//!
//! The mutation hooks are caller-replaceable, so the fixed layer cannot
//! assume they did what their names promise. These contracts check the
//! structural effect of every hook invocation:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** when a custom strategy misbehaves
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function      | Structural Effect Verified          |
//! |------------------------|-------------------------------------|
//! | `check_insert_effect`  | length grew by exactly one          |
//! | `check_remove_effect`  | length shrank by exactly one        |
//! | `check_set_effect`     | length unchanged                    |
//! | `check_clear_effect`   | sequence is empty                   |
//!
//! A hook that violates one of these has broken the container's length
//! bookkeeping; every bounds check after that point is meaningless. Better
//! to fail loudly in debug builds than to hand out corrupt indexes.

/// Check that an insert hook grew the sequence by exactly one element.
///
/// # Panics (debug builds only)
/// Panics if `after != before + 1`.
#[inline]
pub fn check_insert_effect(before: usize, after: usize) {
    debug_assert!(
        after == before + 1,
        "Contract violation: insert_item changed length {} -> {} (expected {})",
        before,
        after,
        before + 1
    );
}

/// Check that a remove hook shrank the sequence by exactly one element.
///
/// # Panics (debug builds only)
/// Panics if `after + 1 != before`.
#[inline]
pub fn check_remove_effect(before: usize, after: usize) {
    debug_assert!(
        after + 1 == before,
        "Contract violation: remove_item changed length {} -> {} (expected {})",
        before,
        after,
        before.saturating_sub(1)
    );
}

/// Check that a set hook replaced in place without resizing.
///
/// # Panics (debug builds only)
/// Panics if `after != before`.
#[inline]
pub fn check_set_effect(before: usize, after: usize) {
    debug_assert!(
        after == before,
        "Contract violation: set_item changed length {} -> {} (expected no change)",
        before,
        after
    );
}

/// Check that a clear hook actually emptied the sequence.
///
/// # Panics (debug builds only)
/// Panics if `after != 0`.
#[inline]
pub fn check_clear_effect(after: usize) {
    debug_assert!(
        after == 0,
        "Contract violation: clear_items left {} elements behind",
        after
    );
}
