//! Layer 3: Compose
//!
//! # Purpose
//!
//! This layer provides key/value object composition: merging the entries of
//! source mappings into a target mapping, with and without overwrite.
//!
//! # Architecture
//!
//! ```text
//! Layer 2:      Layer 3:      Layer 4:         Layer 5:
//! Iteration     Compose       Combinators      Algebra
//!                  ↑ You are here
//!     \            |              |               /
//!      +-----------+--------------+--------------+
//!                  Layer 1: Primitives
//! ```

/// Entry merging: extend and defaults.
pub mod merge;
