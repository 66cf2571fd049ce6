//! Per-argument memoization backed by a private store.
//!
//! ## Purpose
//!
//! This module wraps a single-argument callable with a memo store: each
//! distinct argument value is computed at most once, and equal arguments
//! replay the stored result.
//!
//! ## Design notes
//!
//! * **Keyed by argument value**: The store maps each argument to its
//!   result, looked up per call. Equality is `Eq + Hash` — the static
//!   counterpart of the strict-equality contract.
//! * **Private, unbounded**: The store belongs to one wrapper instance,
//!   grows without eviction, and is dropped with the wrapper. No
//!   cross-instance sharing.
//! * **Hasher**: `ahash` instead of the default SipHash; the store is an
//!   internal cache with no DoS surface.
//!
//! ## Invariants
//!
//! * Two calls with equal arguments invoke the underlying callable at most
//!   once and observe the identical stored result.

// External dependencies
use std::hash::Hash;

use ahash::AHashMap;

// ============================================================================
// Memoized Wrapper
// ============================================================================

/// A single-argument callable with a per-argument result cache.
pub struct Memoized<A, R, F> {
    func: F,
    store: AHashMap<A, R>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: FnMut(&A) -> R,
{
    /// Wrap a callable with an empty memo store.
    pub fn new(func: F) -> Self {
        Self {
            func,
            store: AHashMap::new(),
        }
    }

    /// Return the stored result for `argument`, computing and storing it on
    /// first sight.
    pub fn call(&mut self, argument: A) -> R {
        if let Some(hit) = self.store.get(&argument) {
            return hit.clone();
        }
        let result = (self.func)(&argument);
        self.store.insert(argument, result.clone());
        result
    }

    /// Number of distinct arguments computed so far.
    #[inline]
    pub fn cached_len(&self) -> usize {
        self.store.len()
    }

    /// Whether `argument` has already been computed.
    #[inline]
    pub fn is_cached(&self, argument: &A) -> bool {
        self.store.contains_key(argument)
    }
}
