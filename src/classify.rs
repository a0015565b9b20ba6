//! Classification of floating-point values (ISO 9899 §7.12.3).
//!
//! `fpclassify` and its companion predicates are macros in C with no linkable
//! symbol, and the numeric values of the `FP_*` classification constants are
//! implementation-defined. Rather than exposing a platform encoding, this
//! module derives the category from the encoding-level tests supplied by
//! [`FloatCore`]: NaN first, then infinite, then exactly zero, then
//! magnitude below the least normal value, else normal. Exactly one category
//! applies to any value.

use num_traits::float::FloatCore;

use crate::CFloat;

#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// The category of an IEEE 754 floating-point value.
///
/// Returned by [`fpclassify`]. The variants are mutually exclusive and
/// exhaustive over the value space of `f32` and `f64`, including both zeros,
/// both infinities, and every NaN bit pattern.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FpClass {
    /// A finite value that is neither zero nor subnormal.
    Normal,
    /// Positive or negative zero.
    Zero,
    /// A nonzero value with magnitude below the least normal value.
    Subnormal,
    /// Positive or negative infinity.
    Infinite,
    /// Not-a-Number, quiet or signaling, either sign.
    Nan,
}

/// Classifies a floating-point value (§7.12.3.1).
///
/// The decision procedure is deterministic and independent of the platform
/// `fpclassify` macro, whose numeric result encoding is
/// implementation-defined.
///
/// ```
/// use annexf::{fpclassify, FpClass};
///
/// assert_eq!(fpclassify(1.0_f64), FpClass::Normal);
/// assert_eq!(fpclassify(-0.0_f64), FpClass::Zero);
/// assert_eq!(fpclassify(f64::NAN), FpClass::Nan);
/// ```
pub fn fpclassify<T>(x: T) -> FpClass
where
    T: CFloat,
{
    if FloatCore::is_nan(x) {
        FpClass::Nan
    }
    else if FloatCore::is_infinite(x) {
        FpClass::Infinite
    }
    else if x == T::zero() {
        FpClass::Zero
    }
    else if FloatCore::abs(x) < T::min_positive_value() {
        FpClass::Subnormal
    }
    else {
        FpClass::Normal
    }
}

/// Returns `true` if `x` is zero, subnormal, or normal (§7.12.3.2).
///
/// Equivalently, `x` is neither infinite nor NaN.
#[inline]
pub fn isfinite<T>(x: T) -> bool
where
    T: CFloat,
{
    FloatCore::is_finite(x)
}

/// Returns `true` if `x` is positive or negative infinity (§7.12.3.3).
#[inline]
pub fn isinf<T>(x: T) -> bool
where
    T: CFloat,
{
    FloatCore::is_infinite(x)
}

/// Returns `true` if `x` is NaN (§7.12.3.4).
#[inline]
pub fn isnan<T>(x: T) -> bool
where
    T: CFloat,
{
    FloatCore::is_nan(x)
}

/// Returns `true` if `x` is normal (§7.12.3.5).
///
/// A normal value is finite, nonzero, and not subnormal.
#[inline]
pub fn isnormal<T>(x: T) -> bool
where
    T: CFloat,
{
    FloatCore::is_normal(x)
}

/// Returns `true` if the sign bit of `x` is set (§7.12.3.6).
///
/// This is a test of the sign bit, not an arithmetic comparison: it
/// distinguishes `-0.0` from `+0.0` and a negative NaN from a positive one.
#[inline]
pub fn signbit<T>(x: T) -> bool
where
    T: CFloat,
{
    FloatCore::is_sign_negative(x)
}
