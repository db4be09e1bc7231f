//! Mutation-safe synchronized sequence with a shareable lock.
//!
//! A [`SynchronizedSequence<T>`] is an ordinary growable sequence wrapped in
//! a locking discipline: every operation — indexed get/set, insert, remove,
//! append, clear, membership, iteration — acquires one [`SharedLock`] for
//! its full duration, so concurrent threads always observe a consistent
//! snapshot. The lock may be supplied by the caller, which lets several
//! sequences (or unrelated caller state) move under one umbrella of mutual
//! exclusion.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────────┐     ┌──────────────┐
//! │   lock.rs    │────▶│  sequence.rs   │◀────│   hooks.rs   │
//! │ (SharedLock, │     │ (Synchronized- │     │(MutationHooks│
//! │    guard)    │     │   Sequence)    │     │ DirectHooks) │
//! └──────────────┘     └────────────────┘     └──────────────┘
//!                             ▲  │
//!              ┌──────────────┘  └─────────────┐
//!              │                               ▼
//!       ┌─────────────┐                ┌──────────────┐
//!       │  erased.rs  │                │ contracts.rs │
//!       │ (dyn Any    │                │ (debug-build │
//!       │  boundary)  │                │  hook checks)│
//!       └─────────────┘                └──────────────┘
//! ```
//!
//! The layering is the design: locking and bounds validation are fixed and
//! uniform in `sequence.rs`; the four structural mutations (clear,
//! insert-at, remove-at, set-at) are a swappable [`MutationHooks`] strategy
//! underneath; the [`ErasedSequence`] adapter performs runtime type checks
//! on top, so the typed core never does a dynamic check itself.
//!
//! # Usage
//!
//! ```
//! use syncseq::{SharedLock, SynchronizedSequence};
//!
//! let lock = SharedLock::new();
//! let seq = SynchronizedSequence::with_items(lock.clone(), [1, 2, 3]);
//!
//! seq.push(4);
//! seq.insert(0, 0).unwrap();
//! assert_eq!(seq.to_vec(), [0, 1, 2, 3, 4]);
//!
//! // Coordinate unrelated work under the same lock:
//! let _guard = lock.lock();
//! // ... seq operations in *other* threads now wait for this guard ...
//! ```
//!
//! # What this is not
//!
//! Not a high-throughput concurrent structure: there is no lock-free path,
//! no sharding, no copy-on-write. Not a channel: nothing blocks waiting for
//! elements. One lock, one vec, consistent by construction.

// Module declarations
pub mod contracts;
mod erased;
mod error;
mod hooks;
mod lock;
mod sequence;
pub mod testing;

// Re-exports for public API
pub use erased::{ErasedSequence, ErasedValue};
pub use error::SequenceError;
pub use hooks::{DirectHooks, MutationHooks};
pub use lock::{SharedLock, SharedLockGuard};
pub use sequence::{SnapshotIter, SynchronizedSequence};
