//! The dual bounds asymmetry, exhaustively: random access uses the
//! exclusive bound `index < len`, insertion the inclusive bound
//! `index <= len`. Easy to miscopy, so it gets its own property file.

use proptest::prelude::*;
use syncseq::{SharedLock, SynchronizedSequence};

fn seq_of_len(len: usize) -> SynchronizedSequence<i32> {
    SynchronizedSequence::with_items(SharedLock::new(), 0..len as i32)
}

proptest! {
    /// Property: get/set/remove_at accept exactly 0..len.
    #[test]
    fn prop_random_access_bound_is_exclusive(len in 0usize..16, index in 0usize..20) {
        let in_bounds = index < len;

        prop_assert_eq!(seq_of_len(len).get(index).is_ok(), in_bounds);
        prop_assert_eq!(seq_of_len(len).set(index, -1).is_ok(), in_bounds);
        prop_assert_eq!(seq_of_len(len).remove_at(index).is_ok(), in_bounds);
    }

    /// Property: insert accepts exactly 0..=len, one wider.
    #[test]
    fn prop_insert_bound_is_inclusive_of_len(len in 0usize..16, index in 0usize..20) {
        let seq = seq_of_len(len);
        prop_assert_eq!(seq.insert(index, -1).is_ok(), index <= len);
    }

    /// Property: insert at exactly len is equivalent to push.
    #[test]
    fn prop_insert_at_len_is_append(items in prop::collection::vec(any::<i32>(), 0..16), v in any::<i32>()) {
        let by_insert = SynchronizedSequence::with_items(SharedLock::new(), items.clone());
        by_insert.insert(items.len(), v).unwrap();

        let by_push = SynchronizedSequence::with_items(SharedLock::new(), items);
        by_push.push(v);

        prop_assert_eq!(by_insert.to_vec(), by_push.to_vec());
    }

    /// Property: a rejected operation leaves the sequence byte-for-byte
    /// unchanged.
    #[test]
    fn prop_rejection_never_mutates(len in 0usize..8, past in 0usize..8, v in any::<i32>()) {
        let seq = seq_of_len(len);
        let before = seq.to_vec();

        let _ = seq.get(len + past);
        let _ = seq.set(len + past, v);
        let _ = seq.remove_at(len + past);
        let _ = seq.insert(len + 1 + past, v);

        prop_assert_eq!(seq.to_vec(), before);
    }
}
