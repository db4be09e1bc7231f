// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The four overridable mutation primitives.
//!
//! Everything above this trait is fixed: locking, bounds validation, and the
//! erased-boundary type checks are uniform and cannot be overridden. The
//! structural mutations themselves — clear, insert-at, remove-at, set-at —
//! are the swappable part. A custom strategy can validate elements, journal
//! changes, or fan out notifications, and inherits the locking discipline
//! for free because every hook runs strictly inside the container's lock
//! with the index already validated.
//!
//! The split mirrors the container's one design idea: consistency is
//! guaranteed by the fixed layer, storage mechanics are policy.

/// Storage mutation strategy for [`SynchronizedSequence`].
///
/// Each hook is called with a validated index (see the per-method contract)
/// and must perform exactly the structural change its name says: the fixed
/// layer asserts the length effect in debug builds. A hook that wants to
/// veto a mutation should panic or be paired with validation *before* the
/// element reaches the container; the hook layer itself is infallible.
///
/// [`SynchronizedSequence`]: crate::SynchronizedSequence
pub trait MutationHooks<T> {
    /// Empty the backing sequence.
    fn clear_items(&mut self, items: &mut Vec<T>) {
        items.clear();
    }

    /// Insert `item` at `index`, shifting everything at `index..` up by one.
    /// Caller guarantees `index <= items.len()`.
    fn insert_item(&mut self, items: &mut Vec<T>, index: usize, item: T) {
        items.insert(index, item);
    }

    /// Remove and return the element at `index`, shifting everything after
    /// it down by one. Caller guarantees `index < items.len()`.
    fn remove_item(&mut self, items: &mut Vec<T>, index: usize) -> T {
        items.remove(index)
    }

    /// Replace the element at `index`. Caller guarantees
    /// `index < items.len()`.
    fn set_item(&mut self, items: &mut Vec<T>, index: usize, item: T) {
        items[index] = item;
    }
}

/// Default strategy: mutate the backing vec directly, nothing else.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DirectHooks;

impl<T> MutationHooks<T> for DirectHooks {}
