//! Const-evaluable square root
//!
//! `f64::sqrt` is not callable in const contexts, so constant-input cases
//! (compile-time tables, const assertions) get a Newton–Raphson iteration
//! instead. Runtime code should keep using [`Float::sqrt`], which compiles
//! to a single instruction on every target we care about.
//!
//! `const fn` cannot be generic over float types, so the two widths are
//! separate functions.
//!
//! # Example
//!
//! ```
//! const RMS_UNIT: f64 = ewstats::math::sqrt(0.5);
//! assert!((RMS_UNIT - 0.5f64.sqrt()).abs() < 1e-15);
//! ```
//!
//! [`Float::sqrt`]: num_traits::Float::sqrt

/// Iteration cap for the Newton loops below. Double-precision Newton from
/// 1.0 converges in well under 1100 steps even for extreme exponents; the
/// cap only guards against a non-terminating oscillation between two
/// adjacent representable values.
const MAX_ITERATIONS: u32 = 2000;

/// Square root of an `f64`, evaluable in const contexts.
///
/// Newton–Raphson (Babylonian) iteration starting from 1.0, stopping when
/// two successive iterates are bit-identical. Edge cases follow IEEE-754
/// `sqrt`: strictly negative inputs return NaN, while NaN, +∞, and ±0.0 are
/// fixed points returned unchanged. The guard is mandatory because the
/// iteration itself does not converge on those inputs.
pub const fn sqrt(x: f64) -> f64 {
    if x < 0.0 {
        f64::NAN
    } else if x != x || x == f64::INFINITY || x == 0.0 {
        x
    } else {
        let mut prev = 1.0f64;
        let mut i = 0;
        while i < MAX_ITERATIONS {
            let next = 0.5 * (prev + x / prev);
            if next == prev {
                break;
            }
            prev = next;
            i += 1;
        }
        prev
    }
}

/// Square root of an `f32`, evaluable in const contexts.
///
/// Same algorithm and edge-case handling as [`sqrt`].
pub const fn sqrt_f32(x: f32) -> f32 {
    if x < 0.0 {
        f32::NAN
    } else if x != x || x == f32::INFINITY || x == 0.0 {
        x
    } else {
        let mut prev = 1.0f32;
        let mut i = 0;
        while i < MAX_ITERATIONS {
            let next = 0.5 * (prev + x / prev);
            if next == prev {
                break;
            }
            prev = next;
            i += 1;
        }
        prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_evaluation() {
        // The Newton fixed point may sit one ULP off the correctly rounded
        // root, so compare with an ULP-scale tolerance rather than bits.
        const ROOT_TWO: f64 = sqrt(2.0);
        const ROOT_TWO_F32: f32 = sqrt_f32(2.0);
        assert!((ROOT_TWO - core::f64::consts::SQRT_2).abs() <= 2.0 * f64::EPSILON);
        assert!((ROOT_TWO_F32 - core::f32::consts::SQRT_2).abs() <= 2.0 * f32::EPSILON);
    }

    #[test]
    fn test_fixed_points() {
        assert_eq!(sqrt(0.0), 0.0);
        assert_eq!(sqrt(f64::INFINITY), f64::INFINITY);
        assert!(sqrt(f64::NAN).is_nan());

        assert_eq!(sqrt_f32(0.0), 0.0);
        assert_eq!(sqrt_f32(f32::INFINITY), f32::INFINITY);
        assert!(sqrt_f32(f32::NAN).is_nan());
    }

    #[test]
    fn test_negative_returns_nan() {
        assert!(sqrt(-1.0).is_nan());
        assert!(sqrt(-1e-300).is_nan());
        assert!(sqrt(f64::NEG_INFINITY).is_nan());
        assert!(sqrt_f32(-4.0).is_nan());
    }

    #[test]
    fn test_roundtrip_accuracy() {
        for x in [2.0f64, 1e10, 1e-10, 0.25, 3.0, 123456.789, 1e300, 1e-300] {
            let r = sqrt(x);
            let rel = (r * r - x).abs() / x;
            assert!(rel <= 4.0 * f64::EPSILON, "sqrt({x}) = {r}, rel err {rel}");
        }
    }

    #[test]
    fn test_matches_std_sqrt() {
        for x in [2.0f64, 4.0, 10.0, 1e10, 1e-10, 0.5] {
            let diff = (sqrt(x) - x.sqrt()).abs();
            assert!(diff <= 2.0 * f64::EPSILON * x.sqrt(), "sqrt({x}) off by {diff}");
        }
    }

    #[test]
    fn test_exact_squares() {
        assert_eq!(sqrt(4.0), 2.0);
        assert_eq!(sqrt(9.0), 3.0);
        assert_eq!(sqrt(1.0), 1.0);
        assert_eq!(sqrt_f32(16.0), 4.0);
    }
}
