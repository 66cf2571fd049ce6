//! Stable ascending sort by computed or keyed comparison keys.
//!
//! ## Purpose
//!
//! This module sorts a fresh copy of a sequence ascending by a comparison
//! key: either computed per element by a callable, or looked up in each
//! element when the elements are records.
//!
//! ## Design notes
//!
//! * **Stability**: Equal keys preserve the relative input order; the sort
//!   is stable by contract, not by accident.
//! * **Natural ordering**: Keys compare with their `PartialOrd`;
//!   incomparable pairs rank equal rather than faulting.
//! * **Missing record keys**: A record lacking the sort key ranks before
//!   every record that has one (`None < Some`).
//!
//! ## Invariants
//!
//! * The result is a permutation of the input.
//! * The input is never mutated.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::collection::MapLike;

// ============================================================================
// Sort by Computed Key
// ============================================================================

/// A fresh copy of `seq`, stably sorted ascending by `key(element)`.
pub fn sort_by<T, K, F>(seq: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut result = seq.to_vec();
    result.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));
    result
}

// ============================================================================
// Sort by Record Key
// ============================================================================

/// A fresh copy of `records`, stably sorted ascending by each record's value
/// under `key`. Records lacking the key sort first.
pub fn sort_by_field<M>(records: &[M], key: &M::Key) -> Vec<M>
where
    M: MapLike + Clone,
    M::Value: PartialOrd,
{
    let mut result = records.to_vec();
    result.sort_by(|a, b| {
        a.get(key)
            .partial_cmp(&b.get(key))
            .unwrap_or(Ordering::Equal)
    });
    result
}
