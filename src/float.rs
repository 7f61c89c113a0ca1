// src/float.rs

//! Approximate floating-point comparison.

/// Tolerance below which two components are considered equal.
pub const EPSILON: f64 = 0.00001;

/// Returns true when `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
