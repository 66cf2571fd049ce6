//! Recursive flattening of nested sequences.
//!
//! ## Purpose
//!
//! This module expands a nested sequence of any depth into a single flat
//! sequence, preserving left-to-right, depth-first order.
//!
//! ## Design notes
//!
//! * **Consuming**: Flattening takes ownership of the nested value, so
//!   elements move into the result without cloning.
//! * **Reentrant**: Plain recursion over the nesting; safe to any depth the
//!   stack allows.

// Internal dependencies
use crate::primitives::nested::Nested;

// ============================================================================
// Flattening
// ============================================================================

/// Expand nested sequences at any depth into one flat sequence; plain items
/// pass through unchanged, in depth-first order.
pub fn flatten<T>(nested: Vec<Nested<T>>) -> Vec<T> {
    let mut result = Vec::new();
    flatten_into(nested, &mut result);
    result
}

fn flatten_into<T>(items: Vec<Nested<T>>, out: &mut Vec<T>) {
    for item in items {
        match item {
            Nested::Item(value) => out.push(value),
            Nested::List(inner) => flatten_into(inner, out),
        }
    }
}
