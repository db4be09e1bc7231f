//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::sync::Arc;

use parking_lot::Mutex;

use crate::hooks::MutationHooks;
use crate::lock::SharedLock;
use crate::sequence::SynchronizedSequence;

/// One structural mutation observed by [`RecordingHooks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    Clear,
    Insert(usize),
    Remove(usize),
    Set(usize),
}

/// Mutation strategy that journals every hook call, then mutates directly.
///
/// Clone the handle before handing it to `with_hooks`; both clones share
/// one journal, so the test keeps a window into the container's mutation
/// path. If an operation fails its bounds check, nothing lands in the
/// journal — that is the property most tests use this for.
#[derive(Clone, Default)]
pub struct RecordingHooks {
    journal: Arc<Mutex<Vec<HookEvent>>>,
}

impl RecordingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every hook call so far, in order.
    pub fn events(&self) -> Vec<HookEvent> {
        self.journal.lock().clone()
    }
}

impl<T> MutationHooks<T> for RecordingHooks {
    fn clear_items(&mut self, items: &mut Vec<T>) {
        self.journal.lock().push(HookEvent::Clear);
        items.clear();
    }

    fn insert_item(&mut self, items: &mut Vec<T>, index: usize, item: T) {
        self.journal.lock().push(HookEvent::Insert(index));
        items.insert(index, item);
    }

    fn remove_item(&mut self, items: &mut Vec<T>, index: usize) -> T {
        self.journal.lock().push(HookEvent::Remove(index));
        items.remove(index)
    }

    fn set_item(&mut self, items: &mut Vec<T>, index: usize, item: T) {
        self.journal.lock().push(HookEvent::Set(index));
        items[index] = item;
    }
}

/// Sequence pre-seeded with `0..n`, on a private lock.
pub fn seeded(n: u32) -> SynchronizedSequence<u32> {
    SynchronizedSequence::with_items(SharedLock::new(), 0..n)
}

/// Sequence seeded from a slice, on a private lock.
pub fn seq_of<T: Clone>(elements: &[T]) -> SynchronizedSequence<T> {
    SynchronizedSequence::from_slice(SharedLock::new(), elements)
}
