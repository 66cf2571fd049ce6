//! Positional zipping with missing-value padding.
//!
//! ## Purpose
//!
//! This module combines same-index elements of several sequences into
//! tuples, padding past the end of shorter inputs.
//!
//! ## Design notes
//!
//! * **Explicit sequence list**: The variadic host-language surface becomes
//!   an explicit `&[&[T]]` parameter.
//! * **Longest wins**: The result length equals the longest input; a
//!   position beyond a shorter input's end contributes `None`.
//!
//! ## Invariants
//!
//! * Every tuple has one slot per input sequence, in input order.
//! * Zero inputs yield an empty result.

// ============================================================================
// Zipping
// ============================================================================

/// Tuples of same-index elements across `seqs`; positions past a shorter
/// input's end are `None`.
pub fn zip<T: Clone>(seqs: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = seqs.iter().map(|seq| seq.len()).max().unwrap_or(0);

    let mut result = Vec::with_capacity(longest);
    for position in 0..longest {
        let mut tuple = Vec::with_capacity(seqs.len());
        for seq in seqs {
            tuple.push(seq.get(position).cloned());
        }
        result.push(tuple);
    }
    result
}
