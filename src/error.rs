// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for bounds and type-check violations.
//!
//! Every violation is synchronous and leaves the container untouched: the
//! checks run before any hook touches storage, so a caller that receives one
//! of these can retry with corrected input against unchanged state.
//!
//! Note that `remove`-by-value not finding its element is *not* an error.
//! That operation reports a plain `bool`; this enum is reserved for invalid
//! input, not for "searched and found nothing".

use std::fmt;

/// A rejected operation, carrying enough context to diagnose the misuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Index is past the end for a random-access operation (`get`, `set`,
    /// `remove_at`). The valid range is `0..len`, exclusive of `len`.
    IndexOutOfRange { index: usize, len: usize },
    /// Index is past the append position for `insert`. The valid range is
    /// `0..=len`: inserting *at* `len` is the append boundary and succeeds,
    /// which is deliberately one wider than the random-access bound.
    InsertOutOfRange { index: usize, len: usize },
    /// `copy_into` destination cannot hold `offset + len` elements.
    /// Nothing is copied.
    InsufficientCapacity { required: usize, capacity: usize },
    /// The erased boundary received no value where an element of the named
    /// kind was required. Element kinds never admit null here; callers that
    /// want null-admitting elements use an `Option` element type.
    NullElement { expected: &'static str },
    /// The erased boundary received a value whose runtime type is not the
    /// container's element kind.
    WrongElementType { expected: &'static str },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            SequenceError::InsertOutOfRange { index, len } => {
                write!(
                    f,
                    "insert index {} out of range for length {} (max {})",
                    index, len, len
                )
            }
            SequenceError::InsufficientCapacity { required, capacity } => {
                write!(
                    f,
                    "destination holds {} elements but {} are required",
                    capacity, required
                )
            }
            SequenceError::NullElement { expected } => {
                write!(f, "null not allowed: element kind {} requires a value", expected)
            }
            SequenceError::WrongElementType { expected } => {
                write!(f, "value is not of element kind {}", expected)
            }
        }
    }
}

impl std::error::Error for SequenceError {}
