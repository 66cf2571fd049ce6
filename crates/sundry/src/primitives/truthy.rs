//! Truthiness coercion for predicate results.
//!
//! ## Purpose
//!
//! This module fixes the truthiness rule applied to predicate return values
//! in the short-circuiting folds (`every`, `some`) and the truth-test filters
//! (`filter`, `reject`).
//!
//! ## Design notes
//!
//! * **Return values, not elements**: The coercion applies to what a
//!   predicate *returns*. Raw elements are only coerced by the explicit
//!   `*_truthy` entry points.
//! * **Numeric genericity**: Integer and float implementations go through
//!   `num_traits::Zero` rather than per-type literals.
//! * **Open world**: Any user type can participate by implementing
//!   [`Truthy`]; the iteration layer is generic over it.
//!
//! ## Invariants
//!
//! * `false`, numeric zero, NaN, the empty string, and `None` are falsy.
//! * Every other value of an implementing type is truthy; in particular any
//!   non-zero number, negative numbers included.
//!
//! ## Non-goals
//!
//! * This module does not coerce between value types; it only answers the
//!   truthy/falsy question.

// External dependencies
use num_traits::Zero;

// ============================================================================
// Truthy Trait
// ============================================================================

/// Truthiness of a value, as applied to predicate results.
pub trait Truthy {
    /// Whether the value counts as true in a truth test.
    fn truthy(&self) -> bool;

    /// Whether the value counts as false in a truth test.
    #[inline]
    fn falsy(&self) -> bool {
        !self.truthy()
    }
}

// ============================================================================
// Scalar Implementations
// ============================================================================

impl Truthy for bool {
    #[inline]
    fn truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($ty:ty),* $(,)?) => {$(
        impl Truthy for $ty {
            #[inline]
            fn truthy(&self) -> bool {
                !Zero::is_zero(self)
            }
        }
    )*};
}

impl_truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_for_floats {
    ($($ty:ty),* $(,)?) => {$(
        impl Truthy for $ty {
            // NaN is falsy, matching the host-language rule the contract
            // was distilled from.
            #[inline]
            fn truthy(&self) -> bool {
                !Zero::is_zero(self) && !self.is_nan()
            }
        }
    )*};
}

impl_truthy_for_floats!(f32, f64);

impl Truthy for char {
    #[inline]
    fn truthy(&self) -> bool {
        true
    }
}

// ============================================================================
// String and Container Implementations
// ============================================================================

impl Truthy for str {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    /// `None` is falsy; `Some` defers to the wrapped value.
    #[inline]
    fn truthy(&self) -> bool {
        match self {
            None => false,
            Some(value) => value.truthy(),
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}
