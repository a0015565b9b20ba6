//! Exponential and logarithmic functions (ISO 9899 §7.12.6).
//!
//! Pole errors surface as signed infinities and domain errors as NaN, never
//! as Rust errors. Overflow surfaces as `+∞` and underflow as a zero of the
//! appropriate sign.

use crate::CFloat;

/// Computes e raised to the power `x` (§7.12.6.1).
///
/// `exp(±0) == 1`, `exp(-∞) == +0`, and `exp(+∞) == +∞`. Overflow surfaces
/// as `+∞`.
#[inline]
pub fn exp<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::exp(x)
}

/// Computes 2 raised to the power `x` (§7.12.6.2).
///
/// `exp2(±0) == 1`, `exp2(-∞) == +0`, and `exp2(+∞) == +∞`.
#[inline]
pub fn exp2<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::exp2(x)
}

/// Computes `e^x - 1`, accurate even for `x` near zero where `exp(x) - 1`
/// would cancel (§7.12.6.3).
///
/// `expm1(±0) == ±0`, `expm1(-∞) == -1`, and `expm1(+∞) == +∞`.
#[inline]
pub fn expm1<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::expm1(x)
}

/// Computes the natural logarithm of `x` (§7.12.6.7).
///
/// A pole error occurs at zero: `log(±0) == -∞`. A domain error (NaN) occurs
/// for negative arguments. `log(1) == +0` and `log(+∞) == +∞`.
#[inline]
pub fn log<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::log(x)
}

/// Computes the base-10 logarithm of `x` (§7.12.6.8).
///
/// Same special cases as [`log`].
#[inline]
pub fn log10<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::log10(x)
}

/// Computes `log(1 + x)`, accurate even for `x` near zero (§7.12.6.9).
///
/// `log1p(±0) == ±0`. A pole error occurs at the domain boundary:
/// `log1p(-1) == -∞`. A domain error (NaN) occurs for `x < -1`.
#[inline]
pub fn log1p<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::log1p(x)
}

/// Computes the base-2 logarithm of `x` (§7.12.6.10).
///
/// Same special cases as [`log`].
#[inline]
pub fn log2<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::log2(x)
}
