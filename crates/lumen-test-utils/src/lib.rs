//! Test utilities for Lumen development.
//!
//! Provides proptest strategies for tuples and colors, and assertion
//! helpers that report both sides on a tolerance mismatch.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use lumen_core::{Color, Tuple};
use proptest::prelude::*;

/// Component range used by the strategies.
///
/// Kept small enough that `f32` rounding on sums stays well under
/// [`lumen_core::EPSILON`].
pub const COMPONENT_RANGE: std::ops::Range<f32> = -10.0..10.0;

fn component() -> impl Strategy<Value = f32> {
    COMPONENT_RANGE
}

/// Any vector (`w = 0`).
pub fn arb_vector() -> impl Strategy<Value = Tuple> {
    (component(), component(), component()).prop_map(|(x, y, z)| Tuple::vector(x, y, z))
}

/// A vector at least 0.1 long, safe to normalize.
pub fn arb_nonzero_vector() -> impl Strategy<Value = Tuple> {
    arb_vector().prop_filter("vector too short to normalize", |v| {
        v.x * v.x + v.y * v.y + v.z * v.z > 0.01
    })
}

/// Any point (`w = 1`).
pub fn arb_point() -> impl Strategy<Value = Tuple> {
    (component(), component(), component()).prop_map(|(x, y, z)| Tuple::point(x, y, z))
}

/// A tuple with arbitrary `w`, including values that are neither point nor vector.
pub fn arb_tuple() -> impl Strategy<Value = Tuple> {
    (component(), component(), component(), component())
        .prop_map(|(x, y, z, w)| Tuple::new(x, y, z, w))
}

/// Any color, including out-of-gamut channels.
pub fn arb_color() -> impl Strategy<Value = Color> {
    (-1.0f32..2.0, -1.0f32..2.0, -1.0f32..2.0).prop_map(|(r, g, b)| Color::new(r, g, b))
}

/// Assert two tuples are equal within tolerance.
#[track_caller]
pub fn assert_tuple_approx(actual: Tuple, expected: Tuple) {
    assert!(
        actual.approx_eq(&expected),
        "tuple mismatch: expected {expected}, got {actual}"
    );
}

/// Assert two colors are equal within tolerance.
#[track_caller]
pub fn assert_color_approx(actual: Color, expected: Color) {
    assert!(
        actual.approx_eq(&expected),
        "color mismatch: expected {expected}, got {actual}"
    );
}
