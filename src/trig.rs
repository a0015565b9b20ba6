//! Trigonometric functions (ISO 9899 §7.12.4).
//!
//! Arguments and results of the direct functions are in radians. Domain
//! errors surface as NaN and are never raised as Rust errors.

use crate::CFloat;

/// Computes the principal arc cosine of `x`, in `[0, π]` (§7.12.4.1).
///
/// A domain error (NaN) occurs for arguments outside `[-1, +1]`. The domain
/// boundary itself is accepted: `acos(1) == +0` and `acos(-1) == π`.
#[inline]
pub fn acos<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::acos(x)
}

/// Computes the principal arc sine of `x`, in `[-π/2, +π/2]` (§7.12.4.2).
///
/// A domain error (NaN) occurs for arguments outside `[-1, +1]`.
/// `asin(±0) == ±0`.
#[inline]
pub fn asin<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::asin(x)
}

/// Computes the principal arc tangent of `x`, in `[-π/2, +π/2]` (§7.12.4.3).
///
/// `atan(±0) == ±0` and `atan(±∞)` approaches `±π/2`.
#[inline]
pub fn atan<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::atan(x)
}

/// Computes the arc tangent of `y/x` in `[-π, +π]`, using the signs of both
/// arguments to determine the quadrant (§7.12.4.4).
///
/// The sign of a zero argument participates in quadrant selection, so the
/// full Annex F table applies, including:
///
/// - `atan2(±0, -0) == ±π`
/// - `atan2(±0, +0) == ±0`
/// - `atan2(±0, x) == ±π` for `x < 0`, `±0` for `x > 0`
/// - `atan2(y, ±0) == -π/2` for `y < 0`, `+π/2` for `y > 0`
/// - `atan2(±y, -∞) == ±π` and `atan2(±y, +∞) == ±0` for finite `y > 0`
/// - `atan2(±∞, x) == ±π/2` for finite `x`
/// - `atan2(±∞, -∞) == ±3π/4` and `atan2(±∞, +∞) == ±π/4`
#[inline]
pub fn atan2<T>(y: T, x: T) -> T
where
    T: CFloat,
{
    CFloat::atan2(y, x)
}

/// Computes the cosine of `x` (§7.12.4.5).
///
/// `cos(±0) == 1`; a domain error (NaN) occurs for infinite arguments.
#[inline]
pub fn cos<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::cos(x)
}

/// Computes the sine of `x` (§7.12.4.6).
///
/// `sin(±0) == ±0`; a domain error (NaN) occurs for infinite arguments.
#[inline]
pub fn sin<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::sin(x)
}

/// Computes the tangent of `x` (§7.12.4.7).
///
/// `tan(±0) == ±0`; a domain error (NaN) occurs for infinite arguments.
#[inline]
pub fn tan<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::tan(x)
}
