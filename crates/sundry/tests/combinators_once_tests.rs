#![cfg(feature = "dev")]
//! Tests for the once-only execution wrapper.
//!
//! These tests verify the Once combinator:
//! - exactly one underlying invocation across repeated calls
//! - identical cached results on every call
//! - later arguments are ignored
//!
//! ## Test Organization
//!
//! 1. **Single Invocation** - call counting
//! 2. **Cached Results** - replay semantics
//! 3. **Metadata** - has_run reporting

use std::cell::Cell;
use std::rc::Rc;

use sundry::prelude::*;

// ============================================================================
// Single Invocation Tests
// ============================================================================

/// Test that three calls invoke the underlying callable exactly once.
///
/// Verifies the at-most-once contract and identical results.
#[test]
fn test_once_single_invocation() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let mut wrapper = Once::new(move |n: i32| {
        counter.set(counter.get() + 1);
        n * 2
    });

    let a = wrapper.call(21);
    let b = wrapper.call(21);
    let c = wrapper.call(21);

    assert_eq!(calls.get(), 1, "underlying callable should run once");
    assert_eq!((a, b, c), (42, 42, 42));
}

// ============================================================================
// Cached Result Tests
// ============================================================================

/// Test that later arguments are ignored.
///
/// Verifies that every call after the first replays the original result.
#[test]
fn test_once_ignores_later_arguments() {
    let mut wrapper = Once::new(|n: i32| n + 1);

    assert_eq!(wrapper.call(1), 2);
    assert_eq!(wrapper.call(100), 2);
    assert_eq!(wrapper.call(-5), 2);
}

/// Test once with a non-Copy result type.
///
/// Verifies that the cached value clones out intact.
#[test]
fn test_once_cloned_result() {
    let mut wrapper = Once::new(|name: &str| format!("hello {name}"));

    assert_eq!(wrapper.call("amy"), "hello amy");
    assert_eq!(wrapper.call("bo"), "hello amy");
}

// ============================================================================
// Metadata Tests
// ============================================================================

/// Test has_run before and after the first call.
///
/// Verifies the pending/completed state is observable.
#[test]
fn test_once_has_run() {
    let mut wrapper = Once::new(|n: u8| n);

    assert!(!wrapper.has_run());
    wrapper.call(3);
    assert!(wrapper.has_run());
}
