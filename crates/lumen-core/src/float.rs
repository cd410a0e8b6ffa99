//! Tolerance comparison for `f32` scalars.
//!
//! Every equality and classification check in Lumen goes through
//! [`approx_eq`]. The relation is reflexive and symmetric for finite
//! inputs but not transitive: `a ≈ b` and `b ≈ c` do not imply `a ≈ c`
//! when the differences straddle [`EPSILON`].

/// Absolute tolerance used by [`approx_eq`].
pub const EPSILON: f32 = 1e-5;

/// Returns `true` iff `|a - b| < EPSILON`.
///
/// NaN is never approximately equal to anything, itself included.
/// Two infinities of the same sign compare equal.
///
/// ```
/// use lumen_core::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3));
/// assert!(!approx_eq(1.0, 1.001));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn differences_below_epsilon_are_equal() {
        assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
        assert!(approx_eq(-4.2, -4.2));
    }

    #[test]
    fn differences_at_or_above_epsilon_are_not_equal() {
        assert!(!approx_eq(0.0, EPSILON));
        assert!(!approx_eq(1.0, 1.1));
    }

    #[test]
    fn nan_is_never_equal() {
        assert!(!approx_eq(f32::NAN, f32::NAN));
        assert!(!approx_eq(f32::NAN, 0.0));
    }

    #[test]
    fn matching_infinities_are_equal() {
        assert!(approx_eq(f32::INFINITY, f32::INFINITY));
        assert!(!approx_eq(f32::INFINITY, f32::NEG_INFINITY));
    }

    #[test]
    fn not_transitive_near_the_boundary() {
        let a = 0.0;
        let b = EPSILON * 0.75;
        let c = EPSILON * 1.5;
        assert!(approx_eq(a, b));
        assert!(approx_eq(b, c));
        assert!(!approx_eq(a, c));
    }

    proptest! {
        #[test]
        fn reflexive(a in -1.0e6f32..1.0e6) {
            prop_assert!(approx_eq(a, a));
        }

        #[test]
        fn symmetric(a in -1.0e3f32..1.0e3, b in -1.0e3f32..1.0e3) {
            prop_assert_eq!(approx_eq(a, b), approx_eq(b, a));
        }
    }
}
