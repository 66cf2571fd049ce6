//! # Sundry — uniform collection and combinator utilities
//!
//! A small, flat toolkit offering one consistent vocabulary for iterating,
//! filtering, transforming, and combining collections — ordered sequences and
//! key/value mappings alike — plus function-transforming combinators
//! (once-only execution, memoization, deferred invocation) and sequence
//! set algebra (unique, intersection, difference, zip, flatten).
//!
//! Every operation is an independent, stateless (or locally-stateful)
//! function; no operation depends on another's internal state. Read
//! operations return freshly allocated results and never mutate their
//! arguments, except [`extend`](prelude::extend) and
//! [`defaults`](prelude::defaults), which mutate their target by contract.
//!
//! ## Quick Start
//!
//! ### Sequences
//!
//! ```rust
//! use sundry::prelude::*;
//!
//! let scores = [4, 8, 15, 16, 23, 42];
//!
//! assert_eq!(first(&scores), Some(&4));
//! assert_eq!(last_n(&scores, 2), vec![23, 42]);
//! assert_eq!(filter(&scores, |n| n % 2 == 0), vec![4, 8, 16, 42]);
//! assert_eq!(map(&scores, |n| n * 10), vec![40, 80, 150, 160, 230, 420]);
//! assert_eq!(fold(&scores[..], 0, |sum, n| sum + n), 108);
//! ```
//!
//! ### Mappings
//!
//! The same iteration vocabulary works over key/value mappings. Any type
//! implementing the [`Collection`](prelude::Collection) capability trait
//! participates; `HashMap`, `BTreeMap`, and `IndexMap` are provided.
//!
//! ```rust
//! use std::collections::HashMap;
//! use sundry::prelude::*;
//!
//! let mut ages: HashMap<&str, u32> = HashMap::new();
//! ages.insert("amy", 34);
//! ages.insert("bo", 41);
//!
//! assert!(contains(&ages, &41));
//! assert!(every(&ages, |age| *age >= 18));
//! assert_eq!(fold(&ages, 0, |sum, age| sum + age), 75);
//! ```
//!
//! ### Combinators
//!
//! ```rust
//! use sundry::prelude::*;
//!
//! let mut square = Memoized::new(|n: &u64| n * n);
//! assert_eq!(square.call(4), 16);
//! assert_eq!(square.call(4), 16); // served from the memo store
//! assert_eq!(square.cached_len(), 1);
//! ```
//!
//! ### Set algebra
//!
//! ```rust
//! use sundry::prelude::*;
//!
//! assert_eq!(
//!     intersection(&[&[1, 2, 3][..], &[2, 3, 4][..]]),
//!     vec![2, 3],
//! );
//! assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4][..]]), vec![1, 3]);
//! ```
//!
//! ## Truthiness
//!
//! Predicates handed to [`filter`](prelude::filter), [`every`](prelude::every),
//! and [`some`](prelude::some) may return any [`Truthy`](prelude::Truthy)
//! value, not just `bool`: `false`, numeric zero, NaN, the empty string, and
//! `None` are falsy; everything else is truthy. The coercion applies to the
//! predicate's *return value*, never to the raw element.

// Layer 1: Primitives - capability traits and basic value shapes.
mod primitives;

// Layer 2: Iteration - uniform iteration primitives over sequences and mappings.
mod iteration;

// Layer 3: Compose - key/value object composition.
mod compose;

// Layer 4: Combinators - function-transforming wrappers and the scheduler seam.
mod combinators;

// Layer 5: Algebra - sequence set algebra.
mod algebra;

// Standard sundry prelude.
pub mod prelude {
    pub use crate::algebra::flatten::flatten;
    pub use crate::algebra::ordering::{sort_by, sort_by_field};
    pub use crate::algebra::sets::{difference, intersection};
    pub use crate::algebra::shuffle::{shuffle, shuffle_with};
    pub use crate::algebra::zip::zip;
    pub use crate::combinators::delay::delay;
    pub use crate::combinators::memoize::Memoized;
    pub use crate::combinators::once::Once;
    pub use crate::combinators::scheduler::{ManualScheduler, Scheduler, Task, ThreadScheduler};
    pub use crate::compose::merge::{defaults, extend};
    pub use crate::iteration::access::{first, first_n, index_of, last, last_n};
    pub use crate::iteration::fold::{
        contains, each, every, every_truthy, fold, reduce, some, some_truthy,
    };
    pub use crate::iteration::transform::{filter, invoke, map, pluck, reject, uniq};
    pub use crate::primitives::collection::{Collection, MapLike};
    pub use crate::primitives::nested::Nested;
    pub use crate::primitives::truthy::Truthy;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod iteration {
        pub use crate::iteration::*;
    }
    pub mod compose {
        pub use crate::compose::*;
    }
    pub mod combinators {
        pub use crate::combinators::*;
    }
    pub mod algebra {
        pub use crate::algebra::*;
    }
}
