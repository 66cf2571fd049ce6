//! Layer 4: Combinators
//!
//! # Purpose
//!
//! This layer provides the function-transforming combinators: once-only
//! execution, memoization, and deferred invocation through an injectable
//! scheduler. Each wrapper owns its private state for its own lifetime; no
//! state is shared across instances.
//!
//! # Architecture
//!
//! ```text
//! Layer 2:      Layer 3:      Layer 4:         Layer 5:
//! Iteration     Compose       Combinators      Algebra
//!                                 ↑ You are here
//!     \            |              |               /
//!      +-----------+--------------+--------------+
//!                  Layer 1: Primitives
//! ```

/// Once-only execution with a cached result.
pub mod once;

/// Per-argument memoization backed by a private store.
pub mod memoize;

/// The injectable scheduler seam for deferred invocation.
pub mod scheduler;

/// Deferred invocation of a task after a minimum wait.
pub mod delay;
