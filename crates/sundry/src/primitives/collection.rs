//! Collection capability traits for sequences and mappings.
//!
//! ## Purpose
//!
//! This module defines the dual-dispatch seam between the two container
//! shapes the crate operates on: ordered sequences (keyed by position) and
//! key/value mappings (keyed by map key). Iteration primitives that accept
//! "a collection" are generic over [`Collection`] instead of branching on
//! concrete types.
//!
//! ## Design notes
//!
//! * **Capability, not type names**: A container participates by exposing an
//!   entry iterator, so future container types join by implementing one
//!   trait.
//! * **Owned keys**: `entries` yields owned keys (`usize` positions for
//!   slices, cloned keys for mappings) so a single associated type covers
//!   both shapes.
//! * **Order**: Slices iterate in sequence order. Mapping order is whatever
//!   the map yields; it is not contractually meaningful.
//!
//! ## Key concepts
//!
//! * [`Collection`]: read-side capability — size plus entry iteration.
//! * [`MapLike`]: mutable keyed capability layered on top, for the
//!   composition operations and keyed lookups.
//!
//! ## Non-goals
//!
//! * This module does not implement any iteration primitive itself.
//! * No mutation capability is required of sequences; only mappings are
//!   composed in place.

// External dependencies
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

// ============================================================================
// Collection Trait
// ============================================================================

/// Read capability shared by sequences and mappings.
pub trait Collection {
    /// Entry key: a position for sequences, a map key for mappings.
    type Key: Clone;

    /// Element value.
    type Value;

    /// Number of entries.
    fn size(&self) -> usize;

    /// Iterate entries as `(key, &value)` pairs, in the container's order.
    fn entries(&self) -> Box<dyn Iterator<Item = (Self::Key, &Self::Value)> + '_>;
}

// ============================================================================
// MapLike Trait
// ============================================================================

/// Mutable keyed capability for mappings.
pub trait MapLike: Collection {
    /// Look up the value stored under `key`.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Whether `key` is present.
    #[inline]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    /// Insert or overwrite the value stored under `key`.
    fn put(&mut self, key: Self::Key, value: Self::Value);
}

// ============================================================================
// Sequence Implementations
// ============================================================================

impl<T> Collection for [T] {
    type Key = usize;
    type Value = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (usize, &T)> + '_> {
        Box::new(self.iter().enumerate())
    }
}

impl<T> Collection for Vec<T> {
    type Key = usize;
    type Value = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (usize, &T)> + '_> {
        Box::new(self.iter().enumerate())
    }
}

// ============================================================================
// Mapping Implementations
// ============================================================================

impl<K: Clone, V, S> Collection for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (K, &V)> + '_> {
        Box::new(self.iter().map(|(key, value)| (key.clone(), value)))
    }
}

impl<K, V, S> MapLike for HashMap<K, V, S>
where
    K: Clone + Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    #[inline]
    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Clone, V> Collection for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (K, &V)> + '_> {
        Box::new(self.iter().map(|(key, value)| (key.clone(), value)))
    }
}

impl<K: Clone + Ord, V> MapLike for BTreeMap<K, V> {
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    #[inline]
    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Clone, V, S> Collection for IndexMap<K, V, S> {
    type Key = K;
    type Value = V;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (K, &V)> + '_> {
        Box::new(self.iter().map(|(key, value)| (key.clone(), value)))
    }
}

impl<K, V, S> MapLike for IndexMap<K, V, S>
where
    K: Clone + Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn get(&self, key: &K) -> Option<&V> {
        IndexMap::get(self, key)
    }

    #[inline]
    fn put(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}
