//! Typed access to the C99 math library with IEEE 754 special-value
//! semantics.
//!
//! This crate wraps the platform implementation of ISO 9899 §7.12
//! (`<math.h>`) behind a typed API for `f32` and `f64`. It does not
//! reimplement any transcendental function; evaluation is delegated to the
//! native math library, which is assumed to conform to Annex F (IEC 60559).
//! What the crate does own is the behavioral contract around each call:
//! signed zero, signed infinity, and NaN propagation at every domain
//! boundary, documented per function and exercised by tests.
//!
//! Domain, pole, and range errors are never surfaced as Rust errors. They are
//! represented entirely by the returned value — NaN for domain errors, signed
//! infinity for poles and overflow, signed zero for underflow — exactly as in
//! C. `sqrt(-1.0)` yields NaN; it does not panic and it does not return a
//! `Result`.
//!
//! # Calling conventions
//!
//! Every function is available both as a namespaced free function and as a
//! method through the [`CFloat`] trait. The free functions carry the
//! documented contracts; the trait methods are thin per-value sugar with no
//! independent behavior.
//!
//! ```
//! use annexf::{CFloat, FpClass};
//!
//! assert_eq!(annexf::pow(2.0_f64, 10.0), 1024.0);
//! assert!(annexf::sqrt(-1.0_f64).is_nan());
//! assert_eq!(annexf::fpclassify(f64::INFINITY), FpClass::Infinite);
//!
//! let x = 0.5_f32;
//! assert_eq!(CFloat::sqrt(x * x), 0.5);
//! ```
//!
//! # Concurrency
//!
//! Every operation is a pure function of its by-value inputs and is safe to
//! call from any number of threads without synchronization. The one ambient
//! hazard is the process-wide floating-point environment: [`rint`],
//! [`nearbyint`], [`lrint`], and [`llrint`] consult the current rounding
//! direction, so their results are deterministic only while that mode is
//! stable. The rounding mode is owned by the execution environment, not by
//! this crate.

use core::ffi::{c_int, c_long, c_longlong, CStr};
use num_traits::float::FloatCore;

mod cmath;

pub mod classify;
pub mod cmp;
pub mod consts;
pub mod exponential;
pub mod hyperbolic;
pub mod magnitude;
pub mod manipulation;
pub mod power;
pub mod remainder;
pub mod rounding;
pub mod special;
pub mod trig;

pub use crate::classify::{fpclassify, isfinite, isinf, isnan, isnormal, signbit, FpClass};
pub use crate::cmp::{
    isgreater, isgreaterequal, isless, islessequal, islessgreater, isunordered,
};
pub use crate::exponential::{exp, exp2, expm1, log, log10, log1p, log2};
pub use crate::hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use crate::magnitude::{fabs, fdim, fma, fmax, fmin, hypot};
pub use crate::manipulation::{copysign, nan, nextafter, nexttoward};
pub use crate::power::{cbrt, pow, sqrt};
pub use crate::remainder::{fmod, remainder, remquo};
pub use crate::rounding::{
    ceil, floor, llrint, llround, lrint, lround, nearbyint, rint, round, trunc,
};
pub use crate::special::{erf, erfc, lgamma, tgamma};
pub use crate::trig::{acos, asin, atan, atan2, cos, sin, tan};

/// A primitive floating-point value.
///
/// This trait differentiates types that implement floating-point traits but
/// may not be primitive types.
pub trait Primitive: Copy + Sized {}

impl Primitive for f32 {}
impl Primitive for f64 {}

/// A primitive floating-point value with C math library entry points.
///
/// `CFloat` is the per-precision abstraction of the crate: one method per
/// ISO 9899 §7.12 function, implemented for `f32` and `f64` by selecting the
/// native symbol of the matching precision (`sin` versus `sinf`, and so on).
/// The methods carry no logic of their own; the behavioral contract of each
/// operation is documented on the free function of the same name.
///
/// The [`FloatCore`] supertrait supplies the encoding-level values and
/// predicates (`is_nan`, `min_positive_value`, sign tests) that the derived
/// [`classify`](crate::classify) logic composes.
///
/// Where a method shares a name with a [`FloatCore`] method (`ceil`, `floor`,
/// `round`, `trunc`), the `CFloat` method is the `<math.h>` entry point. Use
/// an explicit path to disambiguate in generic code.
pub trait CFloat: FloatCore + Primitive {
    // Trigonometric functions (§7.12.4).
    fn acos(self) -> Self;
    fn asin(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, x: Self) -> Self;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn tan(self) -> Self;

    // Hyperbolic functions (§7.12.5).
    fn acosh(self) -> Self;
    fn asinh(self) -> Self;
    fn atanh(self) -> Self;
    fn cosh(self) -> Self;
    fn sinh(self) -> Self;
    fn tanh(self) -> Self;

    // Exponential and logarithmic functions (§7.12.6).
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn expm1(self) -> Self;
    fn log(self) -> Self;
    fn log10(self) -> Self;
    fn log1p(self) -> Self;
    fn log2(self) -> Self;

    // Power and absolute-value functions (§7.12.7).
    fn cbrt(self) -> Self;
    fn fabs(self) -> Self;
    fn hypot(self, y: Self) -> Self;
    fn pow(self, y: Self) -> Self;
    fn sqrt(self) -> Self;

    // Error and gamma functions (§7.12.8).
    fn erf(self) -> Self;
    fn erfc(self) -> Self;
    fn lgamma(self) -> Self;
    fn tgamma(self) -> Self;

    // Nearest integer functions (§7.12.9).
    fn ceil(self) -> Self;
    fn floor(self) -> Self;
    fn llrint(self) -> c_longlong;
    fn llround(self) -> c_longlong;
    fn lrint(self) -> c_long;
    fn lround(self) -> c_long;
    fn nearbyint(self) -> Self;
    fn rint(self) -> Self;
    fn round(self) -> Self;
    fn trunc(self) -> Self;

    // Remainder functions (§7.12.10).
    fn fmod(self, y: Self) -> Self;
    fn remainder(self, y: Self) -> Self;
    fn remquo(self, y: Self) -> (Self, c_int);

    // Manipulation functions (§7.12.11).
    fn copysign(self, y: Self) -> Self;
    fn nan_with_payload(tag: &CStr) -> Self;
    fn nextafter(self, y: Self) -> Self;
    fn nexttoward(self, y: f64) -> Self;

    // Maximum, minimum, positive difference, and fused multiply-add
    // (§7.12.12 and §7.12.13).
    fn fdim(self, y: Self) -> Self;
    fn fma(self, y: Self, z: Self) -> Self;
    fn fmax(self, y: Self) -> Self;
    fn fmin(self, y: Self) -> Self;
}

/// Implements `CFloat` for a primitive floating-point type by forwarding each
/// method to the native symbol of the matching precision. Only the symbol
/// varies between precisions; operations whose shape differs from a plain
/// forwarded call are supplied verbatim per instantiation.
macro_rules! impl_foreign_float {
    (
        $t:ty {
            $(fn $method:ident(self $(, $arg:ident: $aty:ty)*) -> $ret:ty => $symbol:ident;)*
        }
        $($extra:item)*
    ) => {
        impl CFloat for $t {
            $(
                #[inline]
                fn $method(self $(, $arg: $aty)*) -> $ret {
                    unsafe { cmath::$symbol(self $(, $arg)*) }
                }
            )*
            $($extra)*
        }
    };
}

impl_foreign_float! {
    f64 {
        fn acos(self) -> Self => acos;
        fn asin(self) -> Self => asin;
        fn atan(self) -> Self => atan;
        fn atan2(self, x: Self) -> Self => atan2;
        fn cos(self) -> Self => cos;
        fn sin(self) -> Self => sin;
        fn tan(self) -> Self => tan;
        fn acosh(self) -> Self => acosh;
        fn asinh(self) -> Self => asinh;
        fn atanh(self) -> Self => atanh;
        fn cosh(self) -> Self => cosh;
        fn sinh(self) -> Self => sinh;
        fn tanh(self) -> Self => tanh;
        fn exp(self) -> Self => exp;
        fn exp2(self) -> Self => exp2;
        fn expm1(self) -> Self => expm1;
        fn log(self) -> Self => log;
        fn log10(self) -> Self => log10;
        fn log1p(self) -> Self => log1p;
        fn log2(self) -> Self => log2;
        fn cbrt(self) -> Self => cbrt;
        fn fabs(self) -> Self => fabs;
        fn hypot(self, y: Self) -> Self => hypot;
        fn pow(self, y: Self) -> Self => pow;
        fn sqrt(self) -> Self => sqrt;
        fn erf(self) -> Self => erf;
        fn erfc(self) -> Self => erfc;
        fn lgamma(self) -> Self => lgamma;
        fn tgamma(self) -> Self => tgamma;
        fn ceil(self) -> Self => ceil;
        fn floor(self) -> Self => floor;
        fn llrint(self) -> c_longlong => llrint;
        fn llround(self) -> c_longlong => llround;
        fn lrint(self) -> c_long => lrint;
        fn lround(self) -> c_long => lround;
        fn nearbyint(self) -> Self => nearbyint;
        fn rint(self) -> Self => rint;
        fn round(self) -> Self => round;
        fn trunc(self) -> Self => trunc;
        fn fmod(self, y: Self) -> Self => fmod;
        fn remainder(self, y: Self) -> Self => remainder;
        fn copysign(self, y: Self) -> Self => copysign;
        fn nextafter(self, y: Self) -> Self => nextafter;
        fn fdim(self, y: Self) -> Self => fdim;
        fn fma(self, y: Self, z: Self) -> Self => fma;
        fn fmax(self, y: Self) -> Self => fmax;
        fn fmin(self, y: Self) -> Self => fmin;
    }

    #[inline]
    fn remquo(self, y: Self) -> (Self, c_int) {
        let mut quo: c_int = 0;
        let remainder = unsafe { cmath::remquo(self, y, &mut quo) };
        (remainder, quo)
    }

    #[inline]
    fn nan_with_payload(tag: &CStr) -> Self {
        unsafe { cmath::nan(tag.as_ptr()) }
    }

    // `nexttoward` differs from `nextafter` only in the `long double` width
    // of its target, which an `f64` target already saturates.
    #[inline]
    fn nexttoward(self, y: f64) -> Self {
        unsafe { cmath::nextafter(self, y) }
    }
}

impl_foreign_float! {
    f32 {
        fn acos(self) -> Self => acosf;
        fn asin(self) -> Self => asinf;
        fn atan(self) -> Self => atanf;
        fn atan2(self, x: Self) -> Self => atan2f;
        fn cos(self) -> Self => cosf;
        fn sin(self) -> Self => sinf;
        fn tan(self) -> Self => tanf;
        fn acosh(self) -> Self => acoshf;
        fn asinh(self) -> Self => asinhf;
        fn atanh(self) -> Self => atanhf;
        fn cosh(self) -> Self => coshf;
        fn sinh(self) -> Self => sinhf;
        fn tanh(self) -> Self => tanhf;
        fn exp(self) -> Self => expf;
        fn exp2(self) -> Self => exp2f;
        fn expm1(self) -> Self => expm1f;
        fn log(self) -> Self => logf;
        fn log10(self) -> Self => log10f;
        fn log1p(self) -> Self => log1pf;
        fn log2(self) -> Self => log2f;
        fn cbrt(self) -> Self => cbrtf;
        fn fabs(self) -> Self => fabsf;
        fn hypot(self, y: Self) -> Self => hypotf;
        fn pow(self, y: Self) -> Self => powf;
        fn sqrt(self) -> Self => sqrtf;
        fn erf(self) -> Self => erff;
        fn erfc(self) -> Self => erfcf;
        fn lgamma(self) -> Self => lgammaf;
        fn tgamma(self) -> Self => tgammaf;
        fn ceil(self) -> Self => ceilf;
        fn floor(self) -> Self => floorf;
        fn llrint(self) -> c_longlong => llrintf;
        fn llround(self) -> c_longlong => llroundf;
        fn lrint(self) -> c_long => lrintf;
        fn lround(self) -> c_long => lroundf;
        fn nearbyint(self) -> Self => nearbyintf;
        fn rint(self) -> Self => rintf;
        fn round(self) -> Self => roundf;
        fn trunc(self) -> Self => truncf;
        fn fmod(self, y: Self) -> Self => fmodf;
        fn remainder(self, y: Self) -> Self => remainderf;
        fn copysign(self, y: Self) -> Self => copysignf;
        fn nextafter(self, y: Self) -> Self => nextafterf;
        fn fdim(self, y: Self) -> Self => fdimf;
        fn fma(self, y: Self, z: Self) -> Self => fmaf;
        fn fmax(self, y: Self) -> Self => fmaxf;
        fn fmin(self, y: Self) -> Self => fminf;
    }

    #[inline]
    fn remquo(self, y: Self) -> (Self, c_int) {
        let mut quo: c_int = 0;
        let remainder = unsafe { cmath::remquof(self, y, &mut quo) };
        (remainder, quo)
    }

    #[inline]
    fn nan_with_payload(tag: &CStr) -> Self {
        unsafe { cmath::nanf(tag.as_ptr()) }
    }

    // `nexttowardf` takes a `long double` target, which has no portable Rust
    // representation. C requires `y` converted to the result type when
    // `x == y`; otherwise the result is the neighbor of `x` in the direction
    // of `y`.
    fn nexttoward(self, y: f64) -> Self {
        if FloatCore::is_nan(self) || FloatCore::is_nan(y) {
            return self + (y as f32);
        }
        if f64::from(self) == y {
            return y as f32;
        }
        let direction = if f64::from(self) < y {
            f32::INFINITY
        }
        else {
            f32::NEG_INFINITY
        };
        unsafe { cmath::nextafterf(self, direction) }
    }
}
