//! Core operation semantics: construction modes, indexed access, the
//! dual bounds asymmetry, and snapshot iteration.

use super::common::{seeded, seq_of, shared_pair};
use syncseq::{SequenceError, SharedLock, SynchronizedSequence};

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn default_mode_is_empty_with_private_lock() {
    let seq: SynchronizedSequence<i32> = SynchronizedSequence::new();
    assert_eq!(seq.len(), 0);
    assert!(seq.is_empty());
    assert_eq!(seq.shared_lock().holders(), 1);
}

#[test]
fn lock_only_mode_is_empty() {
    let seq: SynchronizedSequence<String> = SynchronizedSequence::with_lock(SharedLock::new());
    assert_eq!(seq.len(), 0);
}

#[test]
fn seeded_modes_preserve_order() {
    let lock = SharedLock::new();
    let from_iter = SynchronizedSequence::with_items(lock.clone(), vec![3, 1, 4, 1, 5]);
    let from_slice = SynchronizedSequence::from_slice(lock, &[3, 1, 4, 1, 5]);
    assert_eq!(from_iter.to_vec(), [3, 1, 4, 1, 5]);
    assert_eq!(from_slice.to_vec(), [3, 1, 4, 1, 5]);
}

#[test]
fn seeding_from_empty_inputs_succeeds() {
    let lock = SharedLock::new();
    let a = SynchronizedSequence::<i32>::with_items(lock.clone(), std::iter::empty());
    let b = SynchronizedSequence::<i32>::from_slice(lock, &[]);
    assert_eq!(a.len(), 0);
    assert_eq!(b.len(), 0);
}

#[test]
fn supplied_lock_is_shared_not_owned() {
    let lock = SharedLock::new();
    {
        let seq = SynchronizedSequence::<u8>::with_lock(lock.clone());
        assert!(seq.shared_lock().same_lock(&lock));
        assert_eq!(lock.holders(), 2);
    }
    // Dropping the container must not destroy the caller's lock.
    assert_eq!(lock.holders(), 1);
    let _guard = lock.lock();
}

#[test]
fn collects_from_iterator() {
    let seq: SynchronizedSequence<i32> = (0..4).collect();
    assert_eq!(seq.to_vec(), [0, 1, 2, 3]);
}

// ============================================================================
// READS
// ============================================================================

#[test]
fn get_returns_element_at_index() {
    let seq = seeded(5);
    assert_eq!(seq.get(0).unwrap(), 0);
    assert_eq!(seq.get(4).unwrap(), 4);
}

#[test]
fn contains_and_index_of_use_value_equality() {
    let seq = seq_of(&["a", "b", "b", "c"]);
    assert!(seq.contains(&"b"));
    assert!(!seq.contains(&"z"));
    assert_eq!(seq.index_of(&"b"), Some(1)); // first match wins
    assert_eq!(seq.index_of(&"z"), None);
}

#[test]
fn copy_into_respects_offset() {
    let seq = seq_of(&[7, 8, 9]);
    let mut dest = [0; 5];
    seq.copy_into(&mut dest, 2).unwrap();
    assert_eq!(dest, [0, 0, 7, 8, 9]);
}

#[test]
fn copy_into_rejects_short_destination_without_partial_copy() {
    let seq = seq_of(&[7, 8, 9]);
    let mut dest = [0; 4];
    let err = seq.copy_into(&mut dest, 2).unwrap_err();
    assert_eq!(
        err,
        SequenceError::InsufficientCapacity {
            required: 5,
            capacity: 4
        }
    );
    assert_eq!(dest, [0, 0, 0, 0]);
}

// ============================================================================
// WRITES
// ============================================================================

#[test]
fn get_after_set_returns_new_value() {
    let seq = seeded(3);
    seq.set(1, 99).unwrap();
    assert_eq!(seq.get(1).unwrap(), 99);
    assert_eq!(seq.len(), 3);
}

#[test]
fn push_returns_landing_index() {
    let seq = SynchronizedSequence::new();
    assert_eq!(seq.push("x"), 0);
    assert_eq!(seq.push("y"), 1);
    assert_eq!(seq.to_vec(), ["x", "y"]);
}

#[test]
fn insert_shifts_subsequent_elements_up() {
    let seq = seq_of(&[10, 20, 30]);
    seq.insert(1, 15).unwrap();
    assert_eq!(seq.get(1).unwrap(), 15);
    assert_eq!(seq.to_vec(), [10, 15, 20, 30]);
}

#[test]
fn remove_at_shifts_subsequent_elements_down() {
    let seq = seq_of(&[10, 20, 30]);
    assert_eq!(seq.remove_at(1).unwrap(), 20);
    assert_eq!(seq.to_vec(), [10, 30]);
    assert_eq!(seq.len(), 2);
}

#[test]
fn remove_by_value_reports_boolean_outcome() {
    let seq = seq_of(&[1, 2, 2, 3]);
    assert!(seq.remove(&2)); // removes the first 2 only
    assert_eq!(seq.to_vec(), [1, 2, 3]);
    assert!(!seq.remove(&42)); // not found is not an error
    assert_eq!(seq.len(), 3);
}

#[test]
fn clear_empties_the_sequence() {
    let seq = seeded(10);
    seq.clear();
    assert!(seq.is_empty());
    seq.clear(); // idempotent
    assert_eq!(seq.len(), 0);
}

// ============================================================================
// BOUNDS: exclusive for random access, inclusive-of-len for insert
// ============================================================================

#[test]
fn random_access_at_len_is_rejected_with_offending_index() {
    let seq = seeded(3);
    assert_eq!(
        seq.get(3).unwrap_err(),
        SequenceError::IndexOutOfRange { index: 3, len: 3 }
    );
    assert_eq!(
        seq.set(3, 0).unwrap_err(),
        SequenceError::IndexOutOfRange { index: 3, len: 3 }
    );
    assert_eq!(
        seq.remove_at(3).unwrap_err(),
        SequenceError::IndexOutOfRange { index: 3, len: 3 }
    );
    // Failed operations never mutate.
    assert_eq!(seq.to_vec(), [0, 1, 2]);
}

#[test]
fn insert_at_len_is_the_append_boundary() {
    let seq = seeded(3);
    seq.insert(3, 99).unwrap(); // == len: valid append position
    assert_eq!(seq.to_vec(), [0, 1, 2, 99]);

    assert_eq!(
        seq.insert(5, 7).unwrap_err(), // > len: rejected
        SequenceError::InsertOutOfRange { index: 5, len: 4 }
    );
    assert_eq!(seq.len(), 4);
}

#[test]
fn operations_on_empty_sequence_reject_index_zero_except_insert() {
    let seq: SynchronizedSequence<i32> = SynchronizedSequence::new();
    assert!(seq.get(0).is_err());
    assert!(seq.set(0, 1).is_err());
    assert!(seq.remove_at(0).is_err());
    seq.insert(0, 1).unwrap(); // append position of the empty sequence
    assert_eq!(seq.to_vec(), [1]);
}

// ============================================================================
// SNAPSHOT ITERATION
// ============================================================================

#[test]
fn iter_is_a_point_in_time_snapshot() {
    let seq = seeded(4);
    let iter = seq.iter();
    seq.push(99);
    seq.clear();
    // The in-flight iteration reflects acquisition time, not the mutations.
    assert_eq!(iter.collect::<Vec<_>>(), [0, 1, 2, 3]);
    assert!(seq.is_empty());
}

#[test]
fn iter_is_finite_and_sized() {
    let seq = seeded(5);
    let iter = seq.iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.count(), 5);
}

#[test]
fn borrowing_into_iterator_matches_iter() {
    let seq = seq_of(&[1, 2, 3]);
    let mut sum = 0;
    for x in &seq {
        sum += x;
    }
    assert_eq!(sum, 6);
}

// ============================================================================
// UMBRELLA LOCK COMPOSITION
// ============================================================================

#[test]
fn sequences_sharing_a_lock_share_identity() {
    let (lock, a, b) = shared_pair();
    assert!(a.shared_lock().same_lock(b.shared_lock()));
    assert!(a.shared_lock().same_lock(&lock));
    a.push(1);
    b.push(2);
    assert_eq!(a.to_vec(), [1]);
    assert_eq!(b.to_vec(), [2]);
}
