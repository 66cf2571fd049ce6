//! Uniform random permutation.
//!
//! ## Purpose
//!
//! This module produces a uniformly random permutation of a sequence,
//! without mutating the input.
//!
//! ## Design notes
//!
//! * **Fisher–Yates**: The classic in-place walk over a fresh copy; each of
//!   the `n!` permutations is equally likely given a uniform source.
//! * **Reproducibility**: `shuffle` draws from the thread-local generator;
//!   `shuffle_with` accepts any `Rng`, so a seeded `StdRng` gives
//!   reproducible permutations.
//!
//! ## Invariants
//!
//! * The result is a permutation: same length, same multiset of elements.
//! * Successive calls are independent draws.

// External dependencies
use rand::Rng;

// ============================================================================
// Shuffling
// ============================================================================

/// A fresh, uniformly random permutation of `seq`.
pub fn shuffle<T: Clone>(seq: &[T]) -> Vec<T> {
    shuffle_with(seq, &mut rand::rng())
}

/// Like [`shuffle`], drawing randomness from the supplied generator.
pub fn shuffle_with<T, R>(seq: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut result = seq.to_vec();
    // Fisher–Yates: swap each position with a uniformly chosen earlier one
    for i in (1..result.len()).rev() {
        let j = rng.random_range(0..=i);
        result.swap(i, j);
    }
    result
}
