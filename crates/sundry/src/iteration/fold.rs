//! Folds over sequences and mappings.
//!
//! ## Purpose
//!
//! This module provides the operations that consume a whole collection:
//! side-effecting traversal, the accumulating folds, membership, and the
//! short-circuiting quantifiers. Every function here is generic over the
//! `Collection` capability and behaves identically for sequences and
//! mappings.
//!
//! ## Design notes
//!
//! * **Seedless reduce**: `reduce` seeds the fold with the first element and
//!   accumulates from the second — classic reduce semantics. Seeding with a
//!   numeric zero would silently corrupt non-numeric folds, so the seeded
//!   form is a separate function, `fold`.
//! * **Quantifier coercion**: `every`/`some` coerce the predicate's return
//!   value through `Truthy`; the `*_truthy` variants are the
//!   "predicate omitted" form and test the elements themselves.
//! * **Traversal order**: sequence order for slices, the map's own order for
//!   mappings. Callers must not mutate a collection mid-traversal.
//!
//! ## Invariants
//!
//! * `every` of an empty collection is `true`; `some` of an empty collection
//!   is `false`.
//! * `reduce` of an empty collection is `None`; of a one-element collection,
//!   that element.
//! * `every` and `some` stop at the first falsy / truthy result.

// Internal dependencies
use crate::primitives::collection::Collection;
use crate::primitives::truthy::Truthy;

// ============================================================================
// Traversal
// ============================================================================

/// Invoke `iterator(value, key, collection)` once per entry, for side
/// effects. Keys are positions for sequences and map keys for mappings.
pub fn each<C, F>(collection: &C, mut iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value, &C::Key, &C),
{
    for (key, value) in collection.entries() {
        iterator(value, &key, collection);
    }
}

// ============================================================================
// Accumulating Folds
// ============================================================================

/// Left fold seeded with `initial`, in entry order.
pub fn fold<C, A, F>(collection: &C, initial: A, mut reducer: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Value) -> A,
{
    let mut accumulator = initial;
    for (_, value) in collection.entries() {
        accumulator = reducer(accumulator, value);
    }
    accumulator
}

/// Seedless left fold: the first entry's value is the seed and accumulation
/// starts from the second. Empty collection yields `None`.
pub fn reduce<C, F>(collection: &C, mut reducer: F) -> Option<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(C::Value, &C::Value) -> C::Value,
{
    let mut entries = collection.entries();
    let (_, seed) = entries.next()?;
    let mut accumulator = seed.clone();
    for (_, value) in entries {
        accumulator = reducer(accumulator, value);
    }
    Some(accumulator)
}

// ============================================================================
// Membership
// ============================================================================

/// Whether any value of the collection equals `target`. For mappings the
/// comparison is over values, never keys.
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    collection.entries().any(|(_, value)| value == target)
}

// ============================================================================
// Quantifiers
// ============================================================================

/// Whether the predicate returns a truthy value for every entry. Empty
/// collections satisfy `every` vacuously.
pub fn every<C, B, F>(collection: &C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    B: Truthy,
    F: FnMut(&C::Value) -> B,
{
    collection
        .entries()
        .all(|(_, value)| predicate(value).truthy())
}

/// Whether the predicate returns a truthy value for at least one entry.
/// Empty collections never satisfy `some`.
pub fn some<C, B, F>(collection: &C, mut predicate: F) -> bool
where
    C: Collection + ?Sized,
    B: Truthy,
    F: FnMut(&C::Value) -> B,
{
    collection
        .entries()
        .any(|(_, value)| predicate(value).truthy())
}

/// `every` with the identity predicate: every value is itself truthy.
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    collection.entries().all(|(_, value)| value.truthy())
}

/// `some` with the identity predicate: at least one value is itself truthy.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Value: Truthy,
{
    collection.entries().any(|(_, value)| value.truthy())
}
