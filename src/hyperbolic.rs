//! Hyperbolic functions (ISO 9899 §7.12.5).

use crate::CFloat;

/// Computes the inverse hyperbolic cosine of `x` (§7.12.5.1).
///
/// A domain error (NaN) occurs for arguments less than 1. `acosh(1) == +0`
/// and `acosh(+∞) == +∞`.
#[inline]
pub fn acosh<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::acosh(x)
}

/// Computes the inverse hyperbolic sine of `x` (§7.12.5.2).
///
/// `asinh(±0) == ±0` and `asinh(±∞) == ±∞`.
#[inline]
pub fn asinh<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::asinh(x)
}

/// Computes the inverse hyperbolic tangent of `x` (§7.12.5.3).
///
/// A domain error (NaN) occurs for arguments outside `[-1, +1]`; a pole error
/// occurs at the boundary itself: `atanh(±1) == ±∞`. `atanh(±0) == ±0`.
#[inline]
pub fn atanh<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::atanh(x)
}

/// Computes the hyperbolic cosine of `x` (§7.12.5.4).
///
/// `cosh(±0) == 1` and `cosh(±∞) == +∞`. A range error occurs when the
/// magnitude of `x` is too large, surfacing as `+∞`.
#[inline]
pub fn cosh<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::cosh(x)
}

/// Computes the hyperbolic sine of `x` (§7.12.5.5).
///
/// `sinh(±0) == ±0` and `sinh(±∞) == ±∞`. A range error occurs when the
/// magnitude of `x` is too large, surfacing as an infinity of matching sign.
#[inline]
pub fn sinh<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::sinh(x)
}

/// Computes the hyperbolic tangent of `x` (§7.12.5.6).
///
/// `tanh(±0) == ±0` and `tanh(±∞) == ±1`.
#[inline]
pub fn tanh<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::tanh(x)
}
