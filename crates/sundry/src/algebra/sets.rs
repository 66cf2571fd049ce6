//! Intersection and difference over sequences.
//!
//! ## Purpose
//!
//! This module provides the multiset operations: elements common to all
//! inputs, and elements of the first input absent from the rest.
//!
//! ## Design notes
//!
//! * **Fresh results**: Both operations allocate a new sequence; inputs are
//!   never mutated, in particular never edited in place.
//! * **Multiplicity**: `intersection` deduplicates — each qualifying element
//!   appears once, at its first position in the first input. `difference`
//!   keeps the first input's order and multiplicity untouched.
//! * **Strict equality**: Membership is `PartialEq`; no hashing is required
//!   of the element type.
//!
//! ## Invariants
//!
//! * `intersection` with a single input equals `uniq` of that input.
//! * `difference` with no exclusion sequences copies the first input.

// ============================================================================
// Intersection
// ============================================================================

/// Elements present in every input sequence, in the first input's order,
/// each appearing once. No inputs yield an empty result.
pub fn intersection<T>(seqs: &[&[T]]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    let (head, rest) = match seqs.split_first() {
        Some(split) => split,
        None => return Vec::new(),
    };

    let mut result: Vec<T> = Vec::new();
    for element in head.iter() {
        if result.contains(element) {
            continue;
        }
        if rest.iter().all(|seq| seq.contains(element)) {
            result.push(element.clone());
        }
    }
    result
}

// ============================================================================
// Difference
// ============================================================================

/// Elements of `seq` that occur in none of `others`, preserving `seq`'s
/// order and multiplicity.
pub fn difference<T>(seq: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    let mut result = Vec::new();
    for element in seq {
        if !others.iter().any(|other| other.contains(element)) {
            result.push(element.clone());
        }
    }
    result
}
