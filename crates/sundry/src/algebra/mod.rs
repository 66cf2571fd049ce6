//! Layer 5: Algebra
//!
//! # Purpose
//!
//! This layer provides the sequence set algebra: random permutation, stable
//! keyed ordering, positional zipping, recursive flattening, and the
//! multiset operations intersection and difference. Every function returns a
//! freshly allocated sequence and never mutates its inputs.
//!
//! # Architecture
//!
//! ```text
//! Layer 2:      Layer 3:      Layer 4:         Layer 5:
//! Iteration     Compose       Combinators      Algebra
//!                                                 ↑ You are here
//!     \            |              |               /
//!      +-----------+--------------+--------------+
//!                  Layer 1: Primitives
//! ```

/// Uniform random permutation.
pub mod shuffle;

/// Stable ascending sort by computed or keyed comparison keys.
pub mod ordering;

/// Positional zipping with missing-value padding.
pub mod zip;

/// Recursive flattening of nested sequences.
pub mod flatten;

/// Intersection and difference over sequences.
pub mod sets;
