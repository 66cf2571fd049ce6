//! Layer 2: Iteration
//!
//! # Purpose
//!
//! This layer provides the uniform iteration primitives: positional access,
//! element transformation, and the short-circuiting and accumulating folds.
//! Operations that accept "a collection" behave identically over sequences
//! and mappings via the `Collection` capability.
//!
//! # Architecture
//!
//! ```text
//! Layer 2:      Layer 3:      Layer 4:         Layer 5:
//! Iteration     Compose       Combinators      Algebra
//!    ↑ You are here
//!     \            |              |               /
//!      +-----------+--------------+--------------+
//!                  Layer 1: Primitives
//! ```

/// Positional access: first/last windows and linear search.
pub mod access;

/// Element transformation: map, pluck, invoke, and the truth-test filters.
pub mod transform;

/// Folds over collections: each, fold/reduce, contains, every, some.
pub mod fold;
