#![cfg(feature = "dev")]
//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports every operation and trait
//! needed for day-to-day usage. The prelude should provide a one-stop import
//! for the whole toolkit.
//!
//! ## Test Organization
//!
//! 1. **Iteration Exports** - access, transform, and fold operations
//! 2. **Compose Exports** - extend and defaults
//! 3. **Combinator Exports** - Once, Memoized, Scheduler, delay
//! 4. **Algebra Exports** - shuffle, sort, zip, flatten, sets

use std::collections::HashMap;
use std::time::Duration;

use sundry::prelude::*;

// ============================================================================
// Iteration Exports
// ============================================================================

/// Test that the iteration operations are accessible from the prelude.
///
/// Verifies access, transform, and fold exports in one pass.
#[test]
fn test_prelude_iteration_exports() {
    let seq = [1, 2, 3, 4];

    assert_eq!(first(&seq), Some(&1));
    assert_eq!(last(&seq), Some(&4));
    assert_eq!(first_n(&seq, 2), vec![1, 2]);
    assert_eq!(last_n(&seq, 2), vec![3, 4]);
    assert_eq!(index_of(&seq, &3), Some(2));

    assert_eq!(map(&seq, |n| n * 2), vec![2, 4, 6, 8]);
    assert_eq!(filter(&seq, |n| n % 2 == 0), vec![2, 4]);
    assert_eq!(reject(&seq, |n| n % 2 == 0), vec![1, 3]);
    assert_eq!(uniq(&[1, 1, 2]), vec![1, 2]);

    assert_eq!(fold(&seq[..], 0, |sum, n| sum + n), 10);
    assert_eq!(reduce(&seq[..], |a, b| a + b), Some(10));
    assert!(contains(&seq[..], &2));
    assert!(every(&seq[..], |n| *n > 0));
    assert!(some(&seq[..], |n| *n > 3));
    assert!(every_truthy(&seq[..]));
    assert!(some_truthy(&seq[..]));

    let mut visited = 0;
    each(&seq[..], |_, _, _| visited += 1);
    assert_eq!(visited, 4);
}

// ============================================================================
// Compose Exports
// ============================================================================

/// Test that extend and defaults are accessible from the prelude.
///
/// Verifies both composition operations over a HashMap target.
#[test]
fn test_prelude_compose_exports() {
    let mut target: HashMap<&str, i32> = HashMap::new();
    target.insert("kept", 1);

    let mut source = HashMap::new();
    source.insert("added", 2);

    extend(&mut target, &[&source]);
    defaults(&mut target, &[&source]);

    assert_eq!(target.len(), 2);
}

// ============================================================================
// Combinator Exports
// ============================================================================

/// Test that the combinator types are accessible from the prelude.
///
/// Verifies Once, Memoized, delay, and both schedulers.
#[test]
fn test_prelude_combinator_exports() {
    let mut wrapper = Once::new(|n: i32| n + 1);
    assert_eq!(wrapper.call(1), 2);

    let mut square = Memoized::new(|n: &i32| n * n);
    assert_eq!(square.call(3), 9);

    let scheduler = ManualScheduler::new();
    delay(&scheduler, Duration::from_millis(5), || {});
    assert_eq!(scheduler.pending(), 1);

    // The production scheduler is exported too
    let _threaded: ThreadScheduler = ThreadScheduler::new();
    let _seam: &dyn Scheduler = &scheduler;
}

// ============================================================================
// Algebra Exports
// ============================================================================

/// Test that the algebra operations are accessible from the prelude.
///
/// Verifies shuffle, sort, zip, flatten, intersection, and difference.
#[test]
fn test_prelude_algebra_exports() {
    let seq = [3, 1, 2];

    assert_eq!(shuffle(&seq).len(), 3);
    assert_eq!(sort_by(&seq, |n| *n), vec![1, 2, 3]);

    let zipped = zip(&[&[1, 2][..], &[3][..]]);
    assert_eq!(zipped.len(), 2);

    let nested = vec![Nested::Item(1), Nested::items(vec![2, 3])];
    assert_eq!(flatten(nested), vec![1, 2, 3]);

    assert_eq!(intersection(&[&[1, 2][..], &[2, 3][..]]), vec![2]);
    assert_eq!(difference(&[1, 2, 3], &[&[2][..]]), vec![1, 3]);
}
