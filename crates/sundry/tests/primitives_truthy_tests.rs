#![cfg(feature = "dev")]
//! Tests for the truthiness coercion rule.
//!
//! These tests pin the exact coercion contract applied to predicate return
//! values:
//! - false, numeric zero, NaN, the empty string, and None are falsy
//! - every other value, negative numbers included, is truthy
//!
//! ## Test Organization
//!
//! 1. **Booleans and Numbers** - zero, non-zero, negative, NaN
//! 2. **Strings and Chars** - empty vs non-empty
//! 3. **Option** - None vs Some, deferring to the wrapped value
//! 4. **References** - coercion through indirection

use sundry::internals::primitives::truthy::Truthy;

// ============================================================================
// Boolean and Number Tests
// ============================================================================

/// Test the boolean identities.
///
/// Verifies that booleans coerce to themselves.
#[test]
fn test_truthy_bool() {
    assert!(true.truthy());
    assert!(false.falsy());
}

/// Test integer coercion.
///
/// Verifies that zero is falsy and every other integer truthy, including
/// negatives.
#[test]
fn test_truthy_integers() {
    assert!(0_i32.falsy());
    assert!(0_u64.falsy());
    assert!(1_i32.truthy());
    assert!((-1_i32).truthy());
    assert!(usize::MAX.truthy());
}

/// Test float coercion.
///
/// Verifies that zero and NaN are falsy and other floats truthy.
#[test]
fn test_truthy_floats() {
    assert!(0.0_f64.falsy());
    assert!((-0.0_f64).falsy());
    assert!(f64::NAN.falsy());
    assert!(0.5_f64.truthy());
    assert!((-3.25_f32).truthy());
    assert!(f64::INFINITY.truthy());
}

// ============================================================================
// String and Char Tests
// ============================================================================

/// Test string coercion.
///
/// Verifies that only the empty string is falsy.
#[test]
fn test_truthy_strings() {
    assert!("".falsy());
    assert!("x".truthy());
    assert!(String::new().falsy());
    assert!(String::from("words").truthy());
}

/// Test char coercion.
///
/// Verifies that every char is truthy.
#[test]
fn test_truthy_chars() {
    assert!('a'.truthy());
    assert!('\0'.truthy());
}

// ============================================================================
// Option Tests
// ============================================================================

/// Test Option coercion.
///
/// Verifies that None is falsy and Some defers to the wrapped value.
#[test]
fn test_truthy_option() {
    let missing: Option<i32> = None;

    assert!(missing.falsy());
    assert!(Some(3).truthy());
    assert!(Some(0).falsy(), "Some defers to the wrapped zero");
}

// ============================================================================
// Reference Tests
// ============================================================================

/// Test coercion through references.
///
/// Verifies that indirection does not change the answer.
#[test]
fn test_truthy_references() {
    let zero = 0;
    let one = 1;

    assert!((&zero).falsy());
    assert!((&one).truthy());
    assert!((&&one).truthy());
}
