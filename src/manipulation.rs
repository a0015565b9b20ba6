//! Manipulation functions (ISO 9899 §7.12.11): sign transfer, adjacent
//! representable values, and tagged quiet-NaN construction.

use std::ffi::CString;

use crate::CFloat;

/// Composes a value with the magnitude of `x` and the sign bit of `y`
/// (§7.12.11.1).
///
/// The sign is transferred even when `x` is NaN: the result is then a NaN
/// with the sign of `y`.
#[inline]
pub fn copysign<T>(x: T, y: T) -> T
where
    T: CFloat,
{
    CFloat::copysign(x, y)
}

/// Constructs a quiet NaN whose trailing significand carries a best-effort
/// payload derived from `tag` (§7.12.11.2).
///
/// The payload encoding is implementation-defined: distinct tags may, but
/// need not, produce distinct bit patterns, and the empty tag is valid. The
/// only portable guarantees are that the result classifies as NaN and that
/// no error is raised.
///
/// # Panics
///
/// Panics if `tag` contains an interior NUL byte; the tag crosses the C
/// boundary as a NUL-terminated string, so such a tag is a programming
/// error rather than a numeric edge case.
pub fn nan<T>(tag: &str) -> T
where
    T: CFloat,
{
    let tag = match CString::new(tag) {
        Ok(tag) => tag,
        Err(_) => panic!("NaN payload tag contains an interior NUL byte"),
    };
    T::nan_with_payload(&tag)
}

/// Determines the next representable value after `x` in the direction of `y`
/// (§7.12.11.3).
///
/// Returns `y` itself when `x == y`, which makes the sign of zero
/// significant: `nextafter(+0.0, -0.0) == -0.0`. Stepping past the largest
/// finite magnitude yields an infinity; stepping from an infinity toward a
/// finite value yields the largest finite magnitude.
#[inline]
pub fn nextafter<T>(x: T, y: T) -> T
where
    T: CFloat,
{
    CFloat::nextafter(x, y)
}

/// Equivalent to [`nextafter`] with the direction given at double precision
/// (§7.12.11.4).
///
/// In C the target has type `long double`; this API takes `f64`, the widest
/// precision the crate models. For `f64` values the function is therefore
/// identical to [`nextafter`]. For `f32` values the wider target selects the
/// direction, and `y` converted to `f32` is returned when `x == y`.
#[inline]
pub fn nexttoward<T>(x: T, y: f64) -> T
where
    T: CFloat,
{
    CFloat::nexttoward(x, y)
}
