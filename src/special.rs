//! Error and gamma functions (ISO 9899 §7.12.8).

use crate::CFloat;

/// Computes the error function of `x` (§7.12.8.1).
///
/// `erf(±0) == ±0` and `erf(±∞) == ±1`.
#[inline]
pub fn erf<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::erf(x)
}

/// Computes the complementary error function `1 - erf(x)` (§7.12.8.2).
///
/// `erfc(-∞) == 2` and `erfc(+∞) == +0`. A range error (underflow to zero)
/// occurs for large positive `x`.
#[inline]
pub fn erfc<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::erfc(x)
}

/// Computes the natural logarithm of the absolute value of the gamma
/// function of `x` (§7.12.8.3).
///
/// A pole error occurs at zero and at negative integers: `lgamma` returns
/// `+∞` there. `lgamma(1) == lgamma(2) == +0` and `lgamma(±∞) == +∞`.
///
/// The C function also records the sign of `Γ(x)` in the global `signgam`;
/// that global is not exposed here.
#[inline]
pub fn lgamma<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::lgamma(x)
}

/// Computes the gamma function of `x` (§7.12.8.4).
///
/// A pole error occurs at zero with the sign of the approach:
/// `tgamma(±0) == ±∞`. Negative integers are a domain error (NaN), as is
/// `-∞`. `tgamma(+∞) == +∞`, and overflow surfaces as `+∞`.
#[inline]
pub fn tgamma<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::tgamma(x)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::signbit;

    #[test]
    fn erf_is_odd_and_saturates() {
        assert_eq!(erf(0.0_f64), 0.0);
        assert!(signbit(erf(-0.0_f64)));
        assert_eq!(erf(f64::INFINITY), 1.0);
        assert_eq!(erf(f64::NEG_INFINITY), -1.0);
        assert_relative_eq!(erf(1.0_f64), 0.8427007929497149, max_relative = 1e-14);
        assert_relative_eq!(erf(-1.0_f64), -erf(1.0_f64), max_relative = 1e-15);
    }

    #[test]
    fn erfc_complements_erf() {
        assert_eq!(erfc(0.0_f64), 1.0);
        assert_eq!(erfc(f64::NEG_INFINITY), 2.0);
        assert_eq!(erfc(f64::INFINITY), 0.0);
        for &x in &[-1.5, -0.25, 0.0, 0.5, 2.0] {
            assert_relative_eq!(erf(x) + erfc(x), 1.0, max_relative = 1e-14);
        }
        // Underflow for large arguments surfaces as zero, not an error.
        assert_eq!(erfc(40.0_f64), 0.0);
    }

    #[test]
    fn gamma_at_integer_arguments_is_the_factorial() {
        assert_eq!(tgamma(1.0_f64), 1.0);
        assert_eq!(tgamma(5.0_f64), 24.0);
        assert_relative_eq!(tgamma(0.5_f64), crate::sqrt(crate::consts::PI), max_relative = 1e-14);
    }

    #[test]
    fn gamma_poles_and_domain() {
        assert_eq!(tgamma(0.0_f64), f64::INFINITY);
        assert_eq!(tgamma(-0.0_f64), f64::NEG_INFINITY);
        assert!(tgamma(-1.0_f64).is_nan());
        assert!(tgamma(-4.0_f64).is_nan());
        assert!(tgamma(f64::NEG_INFINITY).is_nan());
        assert_eq!(tgamma(f64::INFINITY), f64::INFINITY);
        assert_eq!(tgamma(180.0_f64), f64::INFINITY);
    }

    #[test]
    fn log_gamma_values_and_poles() {
        assert_eq!(lgamma(1.0_f64), 0.0);
        assert_eq!(lgamma(2.0_f64), 0.0);
        assert_eq!(lgamma(0.0_f64), f64::INFINITY);
        assert_eq!(lgamma(-1.0_f64), f64::INFINITY);
        assert_relative_eq!(
            lgamma(5.0_f64),
            crate::log(24.0_f64),
            max_relative = 1e-14
        );
        // ln Γ(1/2) = ln √π.
        assert_relative_eq!(
            lgamma(0.5_f64),
            0.5723649429247001,
            max_relative = 1e-14
        );
    }

    #[test]
    fn single_precision_variants() {
        assert_eq!(tgamma(5.0_f32), 24.0);
        assert_eq!(erf(f32::INFINITY), 1.0);
        assert_eq!(lgamma(1.0_f32), 0.0);
    }
}
