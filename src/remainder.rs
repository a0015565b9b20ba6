//! Remainder functions (ISO 9899 §7.12.10).

use core::ffi::c_int;

use crate::CFloat;

/// Computes the floating-point remainder of `x / y` (§7.12.10.1).
///
/// The result is `x - n*y` for the integer `n` with `|n*y| <= |x|`: it has
/// the sign of the dividend `x` and magnitude less than `|y|`. A domain
/// error (NaN) occurs when `y` is zero or `x` is infinite.
#[inline]
pub fn fmod<T>(x: T, y: T) -> T
where
    T: CFloat,
{
    CFloat::fmod(x, y)
}

/// Computes the IEC 60559 remainder `x REM y` (§7.12.10.2).
///
/// The result is `x - n*y` where `n` is the integer nearest the exact value
/// of `x / y`, choosing the even `n` on ties. The magnitude of the result is
/// at most half the magnitude of `y`. A domain error (NaN) occurs when `y`
/// is zero or `x` is infinite.
#[inline]
pub fn remainder<T>(x: T, y: T) -> T
where
    T: CFloat,
{
    CFloat::remainder(x, y)
}

/// Computes the same remainder as [`remainder`] and additionally returns the
/// low bits of the integral quotient of `x / y` (§7.12.10.3).
///
/// C's out-parameter becomes the second element of the returned pair. The
/// quotient value has the sign of `x / y` and its magnitude is congruent
/// modulo `2ⁿ` to the magnitude of the integral quotient, for an
/// implementation-defined `n >= 3`. Only the remainder, the quotient's sign,
/// and its low three bits are portable; do not rely on the full quotient.
#[inline]
pub fn remquo<T>(x: T, y: T) -> (T, c_int)
where
    T: CFloat,
{
    CFloat::remquo(x, y)
}
