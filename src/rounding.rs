//! Nearest integer functions (ISO 9899 §7.12.9).
//!
//! The floating-result functions ([`ceil`], [`floor`], [`round`], [`trunc`],
//! [`rint`], [`nearbyint`]) pass `±0`, `±∞`, and NaN through unchanged; in
//! particular the sign of zero is preserved, so `ceil(-0.5) == -0.0`.
//!
//! [`rint`], [`nearbyint`], and the `l`/`ll` conversion variants that follow
//! the current rounding direction read the process-wide floating-point
//! environment. Their results are deterministic only while that mode is
//! stable; concurrent mutation of the rounding mode by other code is a
//! correctness hazard outside this crate's control.
//!
//! When the rounded value of an integer-conversion function does not fit the
//! result type, C leaves the result unspecified: platforms variously
//! saturate or return a sentinel. Callers must not rely on any particular
//! value in that region, and the tests here deliberately do not pin one.

use core::ffi::{c_long, c_longlong};

use crate::CFloat;

/// Rounds `x` to the smallest integer value not less than `x`, that is,
/// toward `+∞` (§7.12.9.1).
#[inline]
pub fn ceil<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::ceil(x)
}

/// Rounds `x` to the largest integer value not greater than `x`, that is,
/// toward `-∞` (§7.12.9.2).
#[inline]
pub fn floor<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::floor(x)
}

/// Rounds `x` to the nearest integer value, with halfway cases away from
/// zero regardless of the current rounding direction (§7.12.9.6).
#[inline]
pub fn round<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::round(x)
}

/// Rounds `x` toward zero (§7.12.9.8).
#[inline]
pub fn trunc<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::trunc(x)
}

/// Rounds `x` to an integer value in floating-point format using the current
/// rounding direction, possibly raising the inexact exception (§7.12.9.4).
///
/// Differs from [`nearbyint`] only in the inexact exception.
#[inline]
pub fn rint<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::rint(x)
}

/// Rounds `x` to an integer value in floating-point format using the current
/// rounding direction, without raising the inexact exception (§7.12.9.3).
#[inline]
pub fn nearbyint<T>(x: T) -> T
where
    T: CFloat,
{
    CFloat::nearbyint(x)
}

/// Rounds `x` to the nearest integer using the current rounding direction
/// and returns it as a `c_long` (§7.12.9.5).
///
/// The result is unspecified when the rounded value does not fit.
#[inline]
pub fn lrint<T>(x: T) -> c_long
where
    T: CFloat,
{
    CFloat::lrint(x)
}

/// Rounds `x` to the nearest integer using the current rounding direction
/// and returns it as a `c_longlong` (§7.12.9.5).
///
/// The result is unspecified when the rounded value does not fit.
#[inline]
pub fn llrint<T>(x: T) -> c_longlong
where
    T: CFloat,
{
    CFloat::llrint(x)
}

/// Rounds `x` to the nearest integer, halfway cases away from zero, and
/// returns it as a `c_long` (§7.12.9.7).
///
/// The result is unspecified when the rounded value does not fit.
#[inline]
pub fn lround<T>(x: T) -> c_long
where
    T: CFloat,
{
    CFloat::lround(x)
}

/// Rounds `x` to the nearest integer, halfway cases away from zero, and
/// returns it as a `c_longlong` (§7.12.9.7).
///
/// The result is unspecified when the rounded value does not fit.
#[inline]
pub fn llround<T>(x: T) -> c_longlong
where
    T: CFloat,
{
    CFloat::llround(x)
}
