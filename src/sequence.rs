// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The synchronized sequence itself.
//!
//! Layout is two layers deep. The outer layer is the [`SharedLock`]: every
//! public operation acquires it first and holds it for the operation's full
//! duration — bounds checks, linear scans, copies, and hook invocations all
//! happen under it, and the scoped guard releases it on every exit path.
//! The inner layer is a storage cell (`parking_lot::Mutex` around the
//! backing vec and the hook strategy) that exists purely for safe interior
//! mutability; it is uncontended by construction because the shared lock is
//! always taken first, so its cost is one uncontested atomic.
//!
//! Keeping the shared lock separate from the storage is what makes the
//! umbrella pattern work: the same `SharedLock` can guard several sequences
//! plus whatever caller state needs to move in step with them.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - Random access (`get`/`set`/`remove_at`) validates `index < len`;
//!   `insert` validates `index <= len`. The one-wider insert bound is the
//!   append position and is deliberate. Failed validation returns before
//!   any hook runs, so state is untouched.
//! - The four hooks are the only code that mutates the backing vec.
//! - Operations on one instance are linearizable: the shared lock serializes
//!   them completely. Nothing is promised across distinct instances unless
//!   they share a lock.

use std::fmt;

use parking_lot::Mutex;

use crate::contracts;
use crate::error::SequenceError;
use crate::hooks::{DirectHooks, MutationHooks};
use crate::lock::SharedLock;

/// Backing storage plus the mutation strategy, opened only under the
/// shared lock.
struct State<T, H> {
    items: Vec<T>,
    hooks: H,
}

/// A generic, lockable, indexable sequence.
///
/// Safe to share across threads without external synchronization; every
/// operation observes a consistent snapshot because the [`SharedLock`]
/// serializes them. Construct with a caller-supplied lock to coordinate
/// this sequence's mutations with other lock holders.
pub struct SynchronizedSequence<T, H = DirectHooks>
where
    H: MutationHooks<T>,
{
    lock: SharedLock,
    cell: Mutex<State<T, H>>,
}

impl<T> SynchronizedSequence<T, DirectHooks> {
    /// Empty sequence with a new private lock.
    pub fn new() -> Self {
        Self::with_lock(SharedLock::new())
    }

    /// Empty sequence serialized by `lock`.
    pub fn with_lock(lock: SharedLock) -> Self {
        Self::with_hooks(lock, DirectHooks)
    }

    /// Sequence seeded from `source` in iteration order, serialized by
    /// `lock`.
    pub fn with_items<I>(lock: SharedLock, source: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            lock,
            cell: Mutex::new(State {
                items: source.into_iter().collect(),
                hooks: DirectHooks,
            }),
        }
    }

    /// Sequence seeded by cloning `elements` in order, serialized by `lock`.
    pub fn from_slice(lock: SharedLock, elements: &[T]) -> Self
    where
        T: Clone,
    {
        Self::with_items(lock, elements.iter().cloned())
    }
}

impl<T> Default for SynchronizedSequence<T, DirectHooks> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SynchronizedSequence<T, DirectHooks> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_items(SharedLock::new(), iter)
    }
}

impl<T, H> SynchronizedSequence<T, H>
where
    H: MutationHooks<T>,
{
    /// Empty sequence with a custom mutation strategy, serialized by `lock`.
    ///
    /// This is the extension point: `hooks` receives every structural
    /// mutation after the fixed layer has validated it.
    pub fn with_hooks(lock: SharedLock, hooks: H) -> Self {
        Self {
            lock,
            cell: Mutex::new(State {
                items: Vec::new(),
                hooks,
            }),
        }
    }

    /// The lock serializing this sequence. Clone it to bring other state
    /// under the same umbrella.
    pub fn shared_lock(&self) -> &SharedLock {
        &self.lock
    }

    /// Current element count.
    pub fn len(&self) -> usize {
        let _outer = self.lock.lock();
        self.cell.lock().items.len()
    }

    /// True if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, or `IndexOutOfRange` carrying the index.
    pub fn get(&self, index: usize) -> Result<T, SequenceError>
    where
        T: Clone,
    {
        let _outer = self.lock.lock();
        let guard = self.cell.lock();
        guard
            .items
            .get(index)
            .cloned()
            .ok_or(SequenceError::IndexOutOfRange {
                index,
                len: guard.items.len(),
            })
    }

    /// Replace the element at `index`. Exclusive upper bound: `index` must
    /// already hold an element.
    pub fn set(&self, index: usize, value: T) -> Result<(), SequenceError> {
        let _outer = self.lock.lock();
        let mut guard = self.cell.lock();
        let State { items, hooks } = &mut *guard;
        if index >= items.len() {
            return Err(SequenceError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        let before = items.len();
        hooks.set_item(items, index, value);
        contracts::check_set_effect(before, items.len());
        Ok(())
    }

    /// Append `item` and return the index it landed at.
    pub fn push(&self, item: T) -> usize {
        let _outer = self.lock.lock();
        let mut guard = self.cell.lock();
        let State { items, hooks } = &mut *guard;
        let index = items.len();
        hooks.insert_item(items, index, item);
        contracts::check_insert_effect(index, items.len());
        index
    }

    /// Insert `item` at `index`, shifting everything at `index..` up by one.
    ///
    /// Inclusive-of-len upper bound: `index == len()` is the append
    /// position and succeeds, one wider than the `get`/`set`/`remove_at`
    /// bound.
    pub fn insert(&self, index: usize, item: T) -> Result<(), SequenceError> {
        let _outer = self.lock.lock();
        let mut guard = self.cell.lock();
        let State { items, hooks } = &mut *guard;
        if index > items.len() {
            return Err(SequenceError::InsertOutOfRange {
                index,
                len: items.len(),
            });
        }
        let before = items.len();
        hooks.insert_item(items, index, item);
        contracts::check_insert_effect(before, items.len());
        Ok(())
    }

    /// Remove and return the element at `index`, shifting everything after
    /// it down by one.
    pub fn remove_at(&self, index: usize) -> Result<T, SequenceError> {
        let _outer = self.lock.lock();
        let mut guard = self.cell.lock();
        let State { items, hooks } = &mut *guard;
        if index >= items.len() {
            return Err(SequenceError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        let before = items.len();
        let removed = hooks.remove_item(items, index);
        contracts::check_remove_effect(before, items.len());
        Ok(removed)
    }

    /// Remove the first element equal to `item`. Returns whether anything
    /// was removed; not finding the element is a normal `false`, never an
    /// error. Find and remove happen under one lock acquisition.
    pub fn remove(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let _outer = self.lock.lock();
        let mut guard = self.cell.lock();
        let State { items, hooks } = &mut *guard;
        match items.iter().position(|x| x == item) {
            Some(index) => {
                let before = items.len();
                hooks.remove_item(items, index);
                contracts::check_remove_effect(before, items.len());
                true
            }
            None => false,
        }
    }

    /// Remove every element.
    pub fn clear(&self) {
        let _outer = self.lock.lock();
        let mut guard = self.cell.lock();
        let State { items, hooks } = &mut *guard;
        hooks.clear_items(items);
        contracts::check_clear_effect(items.len());
    }

    /// True if any element equals `item`. Linear scan under the lock.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let _outer = self.lock.lock();
        self.cell.lock().items.iter().any(|x| x == item)
    }

    /// Index of the first element equal to `item`, if any. Linear scan
    /// under the lock.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let _outer = self.lock.lock();
        self.cell.lock().items.iter().position(|x| x == item)
    }

    /// Bulk-copy the current elements into `dest` starting at `offset`.
    ///
    /// `dest` must hold at least `offset + len()` elements; otherwise
    /// `InsufficientCapacity` and nothing is copied.
    pub fn copy_into(&self, dest: &mut [T], offset: usize) -> Result<(), SequenceError>
    where
        T: Clone,
    {
        let _outer = self.lock.lock();
        let guard = self.cell.lock();
        let required = offset.saturating_add(guard.items.len());
        if dest.len() < required {
            return Err(SequenceError::InsufficientCapacity {
                required,
                capacity: dest.len(),
            });
        }
        dest[offset..required].clone_from_slice(&guard.items);
        Ok(())
    }

    /// Iterate over a point-in-time snapshot of the elements.
    ///
    /// The snapshot is taken under the lock at the moment of the call.
    /// Mutations after that moment are invisible to the iteration — this is
    /// NOT a live view, and the in-flight iterator says nothing about the
    /// sequence's current contents. The weak semantics are inherited from
    /// the original design; callers depending on point-in-time behavior get
    /// exactly that, no more.
    pub fn iter(&self) -> SnapshotIter<T>
    where
        T: Clone,
    {
        SnapshotIter {
            inner: self.to_vec().into_iter(),
        }
    }

    /// Snapshot of the current elements as a plain vec.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let _outer = self.lock.lock();
        self.cell.lock().items.clone()
    }
}

impl<T, H> fmt::Debug for SynchronizedSequence<T, H>
where
    T: fmt::Debug + Clone,
    H: MutationHooks<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}

/// Iterator over a snapshot taken while the lock was held. See
/// [`SynchronizedSequence::iter`] for the (weak) consistency contract.
pub struct SnapshotIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SnapshotIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SnapshotIter<T> {}

impl<T, H> IntoIterator for &SynchronizedSequence<T, H>
where
    T: Clone,
    H: MutationHooks<T>,
{
    type Item = T;
    type IntoIter = SnapshotIter<T>;

    fn into_iter(self) -> SnapshotIter<T> {
        self.iter()
    }
}
