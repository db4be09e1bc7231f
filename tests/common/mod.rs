//! Shared test utilities and fixtures.

#![allow(dead_code)]

use syncseq::{SharedLock, SynchronizedSequence};

// Re-export canonical test utilities from syncseq::testing
pub use syncseq::testing::{seeded, seq_of, HookEvent, RecordingHooks};

/// Two sequences sharing one umbrella lock, for coordination tests.
pub fn shared_pair() -> (
    SharedLock,
    SynchronizedSequence<u32>,
    SynchronizedSequence<u32>,
) {
    let lock = SharedLock::new();
    let a = SynchronizedSequence::with_lock(lock.clone());
    let b = SynchronizedSequence::with_lock(lock.clone());
    (lock, a, b)
}
