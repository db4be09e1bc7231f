// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The untyped-access boundary.
//!
//! Some consumers do not know the element type at compile time — plugin
//! registries, reflective glue, heterogeneous containers of containers.
//! [`ErasedSequence`] gives them the full operation set over
//! `Box<dyn Any + Send>` values.
//!
//! The contract is strict: every incoming value is verified *before* any
//! lock is taken or state inspected. A missing value is rejected with
//! [`SequenceError::NullElement`]; a value of the wrong runtime type with
//! [`SequenceError::WrongElementType`]. Only after verification does the
//! call delegate to the typed operation, so the typed core never performs a
//! dynamic check itself and a rejected value never perturbs the container.

use std::any::{type_name, Any};

use crate::error::SequenceError;
use crate::hooks::MutationHooks;
use crate::sequence::SynchronizedSequence;

/// A value crossing the erased boundary.
pub type ErasedValue = Box<dyn Any + Send>;

/// Verify an incoming erased value against element kind `T`.
///
/// Runs before any lock acquisition. `None` is always rejected: Rust
/// element kinds never admit null. Callers that want null-admitting
/// elements use `Option<U>` as the element type and pass
/// `Some(Box::new(None::<U>))`.
fn verify_element<T: Any>(value: Option<ErasedValue>) -> Result<T, SequenceError> {
    match value {
        None => Err(SequenceError::NullElement {
            expected: type_name::<T>(),
        }),
        Some(boxed) => boxed
            .downcast::<T>()
            .map(|b| *b)
            .map_err(|_| SequenceError::WrongElementType {
                expected: type_name::<T>(),
            }),
    }
}

/// The operation set of [`SynchronizedSequence`] over erased values.
///
/// Object-safe, so dynamic consumers can hold `&dyn ErasedSequence` or
/// `Box<dyn ErasedSequence>` without naming `T`.
pub trait ErasedSequence: Send + Sync {
    /// Current element count.
    fn erased_len(&self) -> usize;

    /// Boxed clone of the element at `index`.
    fn erased_get(&self, index: usize) -> Result<ErasedValue, SequenceError>;

    /// Replace the element at `index` after verifying `value`.
    fn erased_set(&self, index: usize, value: Option<ErasedValue>) -> Result<(), SequenceError>;

    /// Append after verifying `value`; returns the index it landed at.
    fn erased_push(&self, value: Option<ErasedValue>) -> Result<usize, SequenceError>;

    /// Insert at `index` after verifying `value`. `index == len` appends.
    fn erased_insert(&self, index: usize, value: Option<ErasedValue>)
        -> Result<(), SequenceError>;

    /// Remove and return the element at `index`, boxed.
    fn erased_remove_at(&self, index: usize) -> Result<ErasedValue, SequenceError>;

    /// Remove the first element equal to `value`. `Ok(false)` means the
    /// (valid, well-typed) value was not present; invalid input is the
    /// error case.
    fn erased_remove(&self, value: Option<ErasedValue>) -> Result<bool, SequenceError>;

    /// Membership test by value equality.
    fn erased_contains(&self, value: Option<ErasedValue>) -> Result<bool, SequenceError>;

    /// Index of the first element equal to `value`, if present.
    fn erased_index_of(&self, value: Option<ErasedValue>)
        -> Result<Option<usize>, SequenceError>;

    /// Remove every element.
    fn erased_clear(&self);
}

impl<T, H> ErasedSequence for SynchronizedSequence<T, H>
where
    T: Any + Send + Clone + PartialEq,
    H: MutationHooks<T> + Send,
{
    fn erased_len(&self) -> usize {
        self.len()
    }

    fn erased_get(&self, index: usize) -> Result<ErasedValue, SequenceError> {
        self.get(index).map(|item| Box::new(item) as ErasedValue)
    }

    fn erased_set(&self, index: usize, value: Option<ErasedValue>) -> Result<(), SequenceError> {
        let value = verify_element::<T>(value)?;
        self.set(index, value)
    }

    fn erased_push(&self, value: Option<ErasedValue>) -> Result<usize, SequenceError> {
        let value = verify_element::<T>(value)?;
        Ok(self.push(value))
    }

    fn erased_insert(
        &self,
        index: usize,
        value: Option<ErasedValue>,
    ) -> Result<(), SequenceError> {
        let value = verify_element::<T>(value)?;
        self.insert(index, value)
    }

    fn erased_remove_at(&self, index: usize) -> Result<ErasedValue, SequenceError> {
        self.remove_at(index)
            .map(|item| Box::new(item) as ErasedValue)
    }

    fn erased_remove(&self, value: Option<ErasedValue>) -> Result<bool, SequenceError> {
        let value = verify_element::<T>(value)?;
        Ok(self.remove(&value))
    }

    fn erased_contains(&self, value: Option<ErasedValue>) -> Result<bool, SequenceError> {
        let value = verify_element::<T>(value)?;
        Ok(self.contains(&value))
    }

    fn erased_index_of(
        &self,
        value: Option<ErasedValue>,
    ) -> Result<Option<usize>, SequenceError> {
        let value = verify_element::<T>(value)?;
        Ok(self.index_of(&value))
    }

    fn erased_clear(&self) {
        self.clear();
    }
}
