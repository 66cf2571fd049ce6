//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the capability traits and basic value shapes used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! The four operation layers are independent of one another; all of them sit
//! directly on top of this layer.
//!
//! ```text
//! Layer 2:      Layer 3:      Layer 4:         Layer 5:
//! Iteration     Compose       Combinators      Algebra
//!     \            |              |               /
//!      +-----------+--------------+--------------+
//!                  Layer 1: Primitives ← You are here
//! ```

/// Truthiness coercion for predicate results.
pub mod truthy;

/// Collection capability traits for sequences and mappings.
pub mod collection;

/// Arbitrarily nested sequence values.
pub mod nested;
