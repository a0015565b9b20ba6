//! Quiet comparison of floating-point values (ISO 9899 §7.12.14).
//!
//! The C relational operators may raise the invalid-operation exception when
//! an operand is NaN; the §7.12.14 macros compare without raising it. Rust
//! float comparison is already quiet, so these predicates are defined
//! directly over [`PartialOrd::partial_cmp`]: every ordered predicate returns
//! `false` when either operand is NaN, and [`isunordered`] is the only
//! predicate that returns `true` in that case.

use core::cmp::Ordering;

use num_traits::float::FloatCore;

use crate::CFloat;

/// Returns `true` if `x > y`, without raising an exception on NaN
/// (§7.12.14.1).
#[inline]
pub fn isgreater<T>(x: T, y: T) -> bool
where
    T: CFloat,
{
    matches!(x.partial_cmp(&y), Some(Ordering::Greater))
}

/// Returns `true` if `x >= y`, without raising an exception on NaN
/// (§7.12.14.2).
#[inline]
pub fn isgreaterequal<T>(x: T, y: T) -> bool
where
    T: CFloat,
{
    matches!(
        x.partial_cmp(&y),
        Some(Ordering::Greater) | Some(Ordering::Equal)
    )
}

/// Returns `true` if `x < y`, without raising an exception on NaN
/// (§7.12.14.3).
#[inline]
pub fn isless<T>(x: T, y: T) -> bool
where
    T: CFloat,
{
    matches!(x.partial_cmp(&y), Some(Ordering::Less))
}

/// Returns `true` if `x <= y`, without raising an exception on NaN
/// (§7.12.14.4).
#[inline]
pub fn islessequal<T>(x: T, y: T) -> bool
where
    T: CFloat,
{
    matches!(
        x.partial_cmp(&y),
        Some(Ordering::Less) | Some(Ordering::Equal)
    )
}

/// Returns `true` if `x < y` or `x > y` (§7.12.14.5).
///
/// This is `false` both when `x == y` and when the operands are unordered.
/// Note that `-0.0` and `+0.0` compare equal, so they are not less-greater.
#[inline]
pub fn islessgreater<T>(x: T, y: T) -> bool
where
    T: CFloat,
{
    matches!(
        x.partial_cmp(&y),
        Some(Ordering::Less) | Some(Ordering::Greater)
    )
}

/// Returns `true` if `x` and `y` are unordered, that is, if either operand is
/// NaN (§7.12.14.6).
#[inline]
pub fn isunordered<T>(x: T, y: T) -> bool
where
    T: CFloat,
{
    FloatCore::is_nan(x) || FloatCore::is_nan(y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_operands() {
        assert!(isgreater(2.0_f64, 1.0));
        assert!(!isgreater(1.0_f64, 1.0));
        assert!(isgreaterequal(1.0_f64, 1.0));
        assert!(isless(1.0_f64, 2.0));
        assert!(!isless(2.0_f64, 1.0));
        assert!(islessequal(1.0_f64, 1.0));
        assert!(islessgreater(1.0_f64, 2.0));
        assert!(islessgreater(2.0_f64, 1.0));
        assert!(!islessgreater(1.0_f64, 1.0));
        assert!(!isunordered(1.0_f64, 2.0));
    }

    #[test]
    fn every_ordered_predicate_is_false_against_nan() {
        for (x, y) in [
            (f64::NAN, 5.0),
            (5.0, f64::NAN),
            (f64::NAN, f64::NAN),
            (f64::NAN, f64::INFINITY),
        ] {
            assert!(!isgreater(x, y));
            assert!(!isgreaterequal(x, y));
            assert!(!isless(x, y));
            assert!(!islessequal(x, y));
            assert!(!islessgreater(x, y));
            assert!(isunordered(x, y));
        }
    }

    #[test]
    fn zeros_compare_equal_regardless_of_sign() {
        assert!(!isless(-0.0_f64, 0.0));
        assert!(!isgreater(0.0_f64, -0.0));
        assert!(islessequal(-0.0_f64, 0.0));
        assert!(isgreaterequal(-0.0_f64, 0.0));
        assert!(!islessgreater(-0.0_f64, 0.0));
    }

    #[test]
    fn infinities_are_ordered() {
        assert!(isless(f64::NEG_INFINITY, f64::MIN));
        assert!(isgreater(f64::INFINITY, f64::MAX));
        assert!(!isunordered(f64::INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn quiet_comparison_f32() {
        assert!(!isgreater(f32::NAN, 5.0));
        assert!(isunordered(f32::NAN, 5.0));
        assert!(isless(1.0_f32, 2.0));
    }
}
