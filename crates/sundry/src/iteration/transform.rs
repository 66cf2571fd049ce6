//! Element transformation over sequences.
//!
//! ## Purpose
//!
//! This module provides the order-preserving transformations: mapping,
//! record plucking, receiver-style invocation, the truth-test filters, and
//! deduplication.
//!
//! ## Design notes
//!
//! * **Truth tests**: `filter`/`reject` accept predicates returning any
//!   `Truthy` value; the coercion applies to the predicate's return value.
//! * **Partition law**: For any predicate, `filter` and `reject` split a
//!   sequence into two disjoint subsequences whose concatenation is a
//!   permutation of the input.
//! * **Receiver invocation**: The source contract dispatches on a method
//!   *name*; without reflection the closure itself is the method selection,
//!   and it receives the element as a mutable receiver.
//!
//! ## Invariants
//!
//! * `map` preserves length; `filter`/`reject`/`uniq` preserve relative
//!   order.
//! * `uniq` keeps the first occurrence of each distinct element and is
//!   idempotent.

// Internal dependencies
use crate::primitives::collection::MapLike;
use crate::primitives::truthy::Truthy;

// ============================================================================
// Mapping Transformations
// ============================================================================

/// Apply `transformer` to each element in order; length is preserved.
pub fn map<T, U, F>(seq: &[T], mut transformer: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut result = Vec::with_capacity(seq.len());
    for element in seq {
        result.push(transformer(element));
    }
    result
}

/// The value under `key` for each record, in order. A record lacking the key
/// contributes `None`.
pub fn pluck<M>(records: &[M], key: &M::Key) -> Vec<Option<M::Value>>
where
    M: MapLike,
    M::Value: Clone,
{
    let mut result = Vec::with_capacity(records.len());
    for record in records {
        result.push(record.get(key).cloned());
    }
    result
}

/// Call a receiver-style method on each element, collecting the results in
/// order. The receiver is mutable, so methods that update the element (for
/// example an in-place sort) are expressible.
pub fn invoke<T, U, F>(seq: &mut [T], mut method: F) -> Vec<U>
where
    F: FnMut(&mut T) -> U,
{
    let mut result = Vec::with_capacity(seq.len());
    for element in seq.iter_mut() {
        result.push(method(element));
    }
    result
}

// ============================================================================
// Truth-Test Filters
// ============================================================================

/// Elements for which the predicate returns a truthy value, order preserved.
pub fn filter<T, B, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    B: Truthy,
    F: FnMut(&T) -> B,
{
    let mut result = Vec::new();
    for element in seq {
        if predicate(element).truthy() {
            result.push(element.clone());
        }
    }
    result
}

/// Elements for which the predicate returns a falsy value, order preserved.
pub fn reject<T, B, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    B: Truthy,
    F: FnMut(&T) -> B,
{
    let mut result = Vec::new();
    for element in seq {
        if predicate(element).falsy() {
            result.push(element.clone());
        }
    }
    result
}

// ============================================================================
// Deduplication
// ============================================================================

/// First occurrence of each distinct element, in first-seen order.
pub fn uniq<T>(seq: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    let mut result: Vec<T> = Vec::new();
    for element in seq {
        if !result.contains(element) {
            result.push(element.clone());
        }
    }
    result
}
