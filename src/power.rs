//! Power functions (ISO 9899 §7.12.7).

use crate::CFloat;

/// Computes the cube root of `x` (§7.12.7.1).
///
/// Defined for every argument: `cbrt(±0) == ±0` and `cbrt(±∞) == ±∞`.
/// Negative arguments are in the domain, unlike [`pow`] with exponent `1/3`.
#[inline]
pub fn cbrt<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::cbrt(x)
}

/// Computes `x` raised to the power `y` (§7.12.7.4).
///
/// The Annex F table is extensive; the load-bearing rows:
///
/// - `pow(x, ±0) == 1` for any `x`, including NaN
/// - `pow(1, y) == 1` for any `y`, including NaN
/// - `pow(±0, y) == ±∞` for `y` a negative odd integer (pole, sign of the
///   base), and `+∞` for other negative `y`
/// - `pow(±0, y) == ±0` for `y` a positive odd integer, `+0` for other
///   positive `y`
/// - `pow(x, y)` is a domain error (NaN) for finite `x < 0` and finite
///   non-integer `y`
/// - `pow(x, -∞) == +∞` for `|x| < 1` and `+0` for `|x| > 1`; `pow(x, +∞)`
///   is the mirror image; `pow(-1, ±∞) == 1`
/// - `pow(-∞, y) == -0` for `y` a negative odd integer, `+0` for other
///   negative `y`, `-∞` for `y` a positive odd integer, and `+∞` for other
///   positive `y`
#[inline]
pub fn pow<T>(x: T, y: T) -> T
where
    T: CFloat,
{
    CFloat::pow(x, y)
}

/// Computes the nonnegative square root of `x` (§7.12.7.5).
///
/// A domain error (NaN) occurs for `x < 0`. The sign of zero is preserved:
/// `sqrt(-0) == -0`. `sqrt(+∞) == +∞`.
#[inline]
pub fn sqrt<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::sqrt(x)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::signbit;

    #[test]
    fn pow_at_ordinary_points() {
        assert_eq!(pow(2.0_f64, 10.0), 1024.0);
        assert_eq!(pow(2.0_f32, 10.0), 1024.0);
        assert_relative_eq!(pow(9.0_f64, 0.5), 3.0, max_relative = 1e-15);
        assert_eq!(pow(-2.0_f64, 3.0), -8.0);
    }

    #[test]
    fn pow_of_one_and_to_zero_are_always_one() {
        for &y in &[0.5, -3.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(pow(1.0_f64, y), 1.0);
        }
        for &x in &[2.0, -7.0, 0.0, -0.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert_eq!(pow(x, 0.0), 1.0);
            assert_eq!(pow(x, -0.0), 1.0);
        }
    }

    #[test]
    fn pow_signed_zero_base() {
        // Negative odd integer exponents are poles that keep the base's sign.
        assert_eq!(pow(0.0_f64, -3.0), f64::INFINITY);
        assert_eq!(pow(-0.0_f64, -3.0), f64::NEG_INFINITY);
        assert_eq!(pow(-0.0_f64, -4.0), f64::INFINITY);
        assert_eq!(pow(-0.0_f64, -0.5), f64::INFINITY);
        assert_eq!(pow(0.0_f64, 3.0), 0.0);
        assert!(!signbit(pow(0.0_f64, 3.0)));
        assert!(signbit(pow(-0.0_f64, 3.0)));
        assert_eq!(pow(-0.0_f64, 2.0), 0.0);
        assert!(!signbit(pow(-0.0_f64, 2.0)));
    }

    #[test]
    fn pow_negative_base_with_non_integer_exponent_is_a_domain_error() {
        assert!(pow(-2.0_f64, 1.5).is_nan());
        assert!(pow(-0.5_f64, 0.3).is_nan());
        assert!(pow(-2.0_f32, 1.5).is_nan());
    }

    #[test]
    fn pow_infinite_exponent_compares_magnitude_to_one() {
        let inf = f64::INFINITY;
        assert_eq!(pow(0.5_f64, -inf), inf);
        assert_eq!(pow(2.0_f64, -inf), 0.0);
        assert_eq!(pow(0.5_f64, inf), 0.0);
        assert_eq!(pow(2.0_f64, inf), inf);
        assert_eq!(pow(-1.0_f64, inf), 1.0);
        assert_eq!(pow(-1.0_f64, -inf), 1.0);
    }

    #[test]
    fn pow_infinite_base_tracks_exponent_parity() {
        let inf = f64::INFINITY;
        assert_eq!(pow(-inf, -3.0), -0.0);
        assert!(signbit(pow(-inf, -3.0)));
        assert_eq!(pow(-inf, -2.0), 0.0);
        assert!(!signbit(pow(-inf, -2.0)));
        assert_eq!(pow(-inf, 3.0), -inf);
        assert_eq!(pow(-inf, 2.0), inf);
        assert_eq!(pow(inf, -2.0), 0.0);
        assert_eq!(pow(inf, 2.0), inf);
    }

    #[test]
    fn sqrt_domain_and_signed_zero() {
        assert_eq!(sqrt(16.0_f64), 4.0);
        assert_eq!(sqrt(16.0_f32), 4.0);
        assert!(sqrt(-1.0_f64).is_nan());
        assert!(sqrt(f64::NEG_INFINITY).is_nan());
        assert_eq!(sqrt(f64::INFINITY), f64::INFINITY);
        assert_eq!(sqrt(-0.0_f64), 0.0);
        assert!(signbit(sqrt(-0.0_f64)));
        assert!(!signbit(sqrt(0.0_f64)));
    }

    #[test]
    fn cbrt_accepts_the_whole_real_line() {
        assert_eq!(cbrt(27.0_f64), 3.0);
        assert_eq!(cbrt(-27.0_f64), -3.0);
        assert_eq!(cbrt(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(signbit(cbrt(-0.0_f64)));
        assert!(cbrt(f64::NAN).is_nan());
    }
}
