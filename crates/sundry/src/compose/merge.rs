//! Entry merging for mappings.
//!
//! ## Purpose
//!
//! This module provides the two composition operations over mappings:
//! `extend` (overwriting merge) and `defaults` (fill-only merge). Both
//! mutate their target and return it for chaining.
//!
//! ## Design notes
//!
//! * **Explicit source list**: The variadic host-language surface becomes an
//!   explicit `&[&M]` parameter so the contract stays statically checkable.
//! * **Incremental mutation**: Entries are copied one at a time; a panicking
//!   clone mid-traversal leaves the target partially updated. Callers
//!   needing atomicity copy the target first.
//!
//! ## Invariants
//!
//! * `extend`: later sources overwrite earlier ones and pre-existing target
//!   entries.
//! * `defaults`: a key is copied only while the target lacks it, checked at
//!   copy time — the first source to offer an unset key wins, and the
//!   target's own entries are never replaced.

// Internal dependencies
use crate::primitives::collection::MapLike;

// ============================================================================
// Overwriting Merge
// ============================================================================

/// Copy every entry of each source into `target`, in source order; later
/// sources overwrite. Returns the mutated target for chaining.
pub fn extend<'a, M>(target: &'a mut M, sources: &[&M]) -> &'a mut M
where
    M: MapLike,
    M::Value: Clone,
{
    for source in sources {
        for (key, value) in source.entries() {
            target.put(key, value.clone());
        }
    }
    target
}

// ============================================================================
// Fill-Only Merge
// ============================================================================

/// Copy an entry into `target` only when `target` does not yet define its
/// key. Returns the mutated target for chaining.
pub fn defaults<'a, M>(target: &'a mut M, sources: &[&M]) -> &'a mut M
where
    M: MapLike,
    M::Value: Clone,
{
    for source in sources {
        for (key, value) in source.entries() {
            if !target.contains_key(&key) {
                target.put(key, value.clone());
            }
        }
    }
    target
}
