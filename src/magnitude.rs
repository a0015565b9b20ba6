//! Absolute value, distance, extrema, positive difference, and fused
//! multiply-add (ISO 9899 §7.12.7, §7.12.12, and §7.12.13).

use crate::CFloat;

/// Computes the absolute value of `x` (§7.12.7.2).
///
/// Clears the sign bit and nothing else: `fabs(±0) == +0`,
/// `fabs(±∞) == +∞`, and the result for a NaN argument is a NaN.
#[inline]
pub fn fabs<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::fabs(x)
}

/// Computes `√(x² + y²)` without undue overflow or underflow in the
/// intermediate squares (§7.12.7.3).
///
/// `hypot(±∞, y) == +∞` for any `y`, including NaN; the infinity dominates
/// the unordered operand.
#[inline]
pub fn hypot<T>(x: T, y: T) -> T
where
    T: CFloat,
{
    CFloat::hypot(x, y)
}

/// Computes the positive difference of `x` and `y`: `x - y` when `x > y`,
/// otherwise `+0` (§7.12.12.1).
#[inline]
pub fn fdim<T>(x: T, y: T) -> T
where
    T: CFloat,
{
    CFloat::fdim(x, y)
}

/// Computes the maximum of `x` and `y`, treating NaN as missing data: when
/// exactly one argument is NaN, the other argument is returned (§7.12.12.2).
#[inline]
pub fn fmax<T>(x: T, y: T) -> T
where
    T: CFloat,
{
    CFloat::fmax(x, y)
}

/// Computes the minimum of `x` and `y`, treating NaN as missing data: when
/// exactly one argument is NaN, the other argument is returned (§7.12.12.3).
#[inline]
pub fn fmin<T>(x: T, y: T) -> T
where
    T: CFloat,
{
    CFloat::fmin(x, y)
}

/// Computes `x * y + z` rounded once, as a single ternary operation
/// (§7.12.13.1).
///
/// The intermediate product is not rounded, so the result can differ from
/// the separately rounded `x * y + z` and is never less accurate.
#[inline]
pub fn fma<T>(x: T, y: T, z: T) -> T
where
    T: CFloat,
{
    CFloat::fma(x, y, z)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::signbit;

    #[test]
    fn fabs_clears_the_sign_bit_only() {
        assert_eq!(fabs(-5.0_f64), 5.0);
        assert_eq!(fabs(5.0_f64), 5.0);
        assert!(!signbit(fabs(-0.0_f64)));
        assert_eq!(fabs(f64::NEG_INFINITY), f64::INFINITY);
        assert!(fabs(f64::NAN).is_nan());
    }

    #[test]
    fn hypot_is_the_euclidean_distance() {
        assert_eq!(hypot(3.0_f64, 4.0), 5.0);
        assert_eq!(hypot(-3.0_f64, 4.0), 5.0);
        assert_eq!(hypot(0.0_f64, -0.0), 0.0);
    }

    #[test]
    fn hypot_avoids_spurious_overflow() {
        let big = 1.0e300_f64;
        let h = hypot(big, big);
        assert!(h.is_finite());
        assert_relative_eq!(h, big * core::f64::consts::SQRT_2, max_relative = 1e-15);

        let small = 1.0e-300_f64;
        assert_relative_eq!(
            hypot(small, small),
            small * core::f64::consts::SQRT_2,
            max_relative = 1e-15
        );
    }

    #[test]
    fn hypot_infinity_dominates_nan() {
        assert_eq!(hypot(f64::INFINITY, f64::NAN), f64::INFINITY);
        assert_eq!(hypot(f64::NAN, f64::NEG_INFINITY), f64::INFINITY);
        assert!(hypot(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn fdim_is_the_positive_difference() {
        assert_eq!(fdim(5.0_f64, 3.0), 2.0);
        assert_eq!(fdim(3.0_f64, 5.0), 0.0);
        assert!(!signbit(fdim(3.0_f64, 5.0)));
        assert_eq!(fdim(3.0_f64, 3.0), 0.0);
        assert!(fdim(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn extrema_tolerate_a_single_nan() {
        assert_eq!(fmax(f64::NAN, 5.0), 5.0);
        assert_eq!(fmax(5.0, f64::NAN), 5.0);
        assert_eq!(fmin(f64::NAN, 5.0), 5.0);
        assert_eq!(fmin(5.0, f64::NAN), 5.0);
        assert!(fmax(f64::NAN, f64::NAN).is_nan());
        assert!(fmin(f64::NAN, f64::NAN).is_nan());
        assert_eq!(fmax(1.0_f64, 2.0), 2.0);
        assert_eq!(fmin(1.0_f64, 2.0), 1.0);
        assert_eq!(fmax(f32::NAN, 5.0), 5.0);
        assert_eq!(fmin(5.0_f32, f32::NAN), 5.0);
    }

    #[test]
    fn fma_rounds_once() {
        assert_eq!(fma(2.0_f64, 3.0, 4.0), 10.0);
        // With separate rounding the product collapses to 1.0 and the sum to
        // zero; the fused form retains the low-order term.
        let x = 1.0 + f64::EPSILON;
        let y = 1.0 - f64::EPSILON;
        let exact = fma(x, y, -1.0);
        assert_eq!(exact, -f64::EPSILON * f64::EPSILON);
        assert_ne!(exact, x * y - 1.0);
    }
}
