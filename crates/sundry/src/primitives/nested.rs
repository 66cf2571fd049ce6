//! Arbitrarily nested sequence values.
//!
//! ## Purpose
//!
//! This module provides the recursive value shape consumed by `flatten`: a
//! sequence whose elements are either plain items or further sequences, to
//! any depth.
//!
//! ## Design notes
//!
//! * **Explicit recursion**: A dedicated enum makes the nesting statically
//!   checkable instead of relying on dynamic typing.
//! * **Ergonomics**: `From<T>` lets item literals convert with `.into()`;
//!   [`Nested::list`] builds the branch case.

// ============================================================================
// Nested Value
// ============================================================================

/// One level of an arbitrarily nested sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A plain element; passes through flattening unchanged.
    Item(T),

    /// A nested sequence, expanded recursively by flattening.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Build the branch case from already-wrapped children.
    #[inline]
    pub fn list(children: Vec<Nested<T>>) -> Self {
        Nested::List(children)
    }

    /// Build the branch case from plain items.
    #[inline]
    pub fn items(children: Vec<T>) -> Self {
        Nested::List(children.into_iter().map(Nested::Item).collect())
    }
}

impl<T> From<T> for Nested<T> {
    #[inline]
    fn from(value: T) -> Self {
        Nested::Item(value)
    }
}
