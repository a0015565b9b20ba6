//! Declarations of the platform C math library entry points.
//!
//! This module is a pure declaration surface: one `extern "C"` item per
//! ISO 9899 §7.12 function, in both precisions. The platform implementation
//! is assumed to conform to Annex F (IEC 60559). No semantics are added here;
//! the typed contract for each function is documented on the safe wrappers in
//! the rest of the crate.
//!
//! The classification and comparison operations of §7.12.3 and §7.12.14
//! (`fpclassify`, `isnan`, `isgreater`, and so on) are macros in C and have no
//! linkable symbol. Their semantics are derived in Rust in the [`classify`]
//! and [`cmp`] modules instead.
//!
//! `nexttoward` and `nexttowardf` accept a `long double` argument, which has
//! no portable Rust representation, so they are not declared. The
//! [`manipulation`] module derives their behavior from `nextafter`.
//!
//! [`classify`]: crate::classify
//! [`cmp`]: crate::cmp
//! [`manipulation`]: crate::manipulation

use core::ffi::{c_char, c_int, c_long, c_longlong};

#[cfg_attr(unix, link(name = "m"))]
extern "C" {
    // Trigonometric functions (§7.12.4).
    pub fn acos(x: f64) -> f64;
    pub fn asin(x: f64) -> f64;
    pub fn atan(x: f64) -> f64;
    pub fn atan2(y: f64, x: f64) -> f64;
    pub fn cos(x: f64) -> f64;
    pub fn sin(x: f64) -> f64;
    pub fn tan(x: f64) -> f64;
    pub fn acosf(x: f32) -> f32;
    pub fn asinf(x: f32) -> f32;
    pub fn atanf(x: f32) -> f32;
    pub fn atan2f(y: f32, x: f32) -> f32;
    pub fn cosf(x: f32) -> f32;
    pub fn sinf(x: f32) -> f32;
    pub fn tanf(x: f32) -> f32;

    // Hyperbolic functions (§7.12.5).
    pub fn acosh(x: f64) -> f64;
    pub fn asinh(x: f64) -> f64;
    pub fn atanh(x: f64) -> f64;
    pub fn cosh(x: f64) -> f64;
    pub fn sinh(x: f64) -> f64;
    pub fn tanh(x: f64) -> f64;
    pub fn acoshf(x: f32) -> f32;
    pub fn asinhf(x: f32) -> f32;
    pub fn atanhf(x: f32) -> f32;
    pub fn coshf(x: f32) -> f32;
    pub fn sinhf(x: f32) -> f32;
    pub fn tanhf(x: f32) -> f32;

    // Exponential and logarithmic functions (§7.12.6).
    pub fn exp(x: f64) -> f64;
    pub fn exp2(x: f64) -> f64;
    pub fn expm1(x: f64) -> f64;
    pub fn log(x: f64) -> f64;
    pub fn log10(x: f64) -> f64;
    pub fn log1p(x: f64) -> f64;
    pub fn log2(x: f64) -> f64;
    pub fn expf(x: f32) -> f32;
    pub fn exp2f(x: f32) -> f32;
    pub fn expm1f(x: f32) -> f32;
    pub fn logf(x: f32) -> f32;
    pub fn log10f(x: f32) -> f32;
    pub fn log1pf(x: f32) -> f32;
    pub fn log2f(x: f32) -> f32;

    // Power and absolute-value functions (§7.12.7).
    pub fn cbrt(x: f64) -> f64;
    pub fn fabs(x: f64) -> f64;
    pub fn hypot(x: f64, y: f64) -> f64;
    pub fn pow(x: f64, y: f64) -> f64;
    pub fn sqrt(x: f64) -> f64;
    pub fn cbrtf(x: f32) -> f32;
    pub fn fabsf(x: f32) -> f32;
    pub fn hypotf(x: f32, y: f32) -> f32;
    pub fn powf(x: f32, y: f32) -> f32;
    pub fn sqrtf(x: f32) -> f32;

    // Error and gamma functions (§7.12.8).
    pub fn erf(x: f64) -> f64;
    pub fn erfc(x: f64) -> f64;
    pub fn lgamma(x: f64) -> f64;
    pub fn tgamma(x: f64) -> f64;
    pub fn erff(x: f32) -> f32;
    pub fn erfcf(x: f32) -> f32;
    pub fn lgammaf(x: f32) -> f32;
    pub fn tgammaf(x: f32) -> f32;

    // Nearest integer functions (§7.12.9).
    pub fn ceil(x: f64) -> f64;
    pub fn floor(x: f64) -> f64;
    pub fn llrint(x: f64) -> c_longlong;
    pub fn llround(x: f64) -> c_longlong;
    pub fn lrint(x: f64) -> c_long;
    pub fn lround(x: f64) -> c_long;
    pub fn nearbyint(x: f64) -> f64;
    pub fn rint(x: f64) -> f64;
    pub fn round(x: f64) -> f64;
    pub fn trunc(x: f64) -> f64;
    pub fn ceilf(x: f32) -> f32;
    pub fn floorf(x: f32) -> f32;
    pub fn llrintf(x: f32) -> c_longlong;
    pub fn llroundf(x: f32) -> c_longlong;
    pub fn lrintf(x: f32) -> c_long;
    pub fn lroundf(x: f32) -> c_long;
    pub fn nearbyintf(x: f32) -> f32;
    pub fn rintf(x: f32) -> f32;
    pub fn roundf(x: f32) -> f32;
    pub fn truncf(x: f32) -> f32;

    // Remainder functions (§7.12.10).
    pub fn fmod(x: f64, y: f64) -> f64;
    pub fn remainder(x: f64, y: f64) -> f64;
    pub fn remquo(x: f64, y: f64, quo: *mut c_int) -> f64;
    pub fn fmodf(x: f32, y: f32) -> f32;
    pub fn remainderf(x: f32, y: f32) -> f32;
    pub fn remquof(x: f32, y: f32, quo: *mut c_int) -> f32;

    // Manipulation functions (§7.12.11).
    pub fn copysign(x: f64, y: f64) -> f64;
    pub fn nan(tag: *const c_char) -> f64;
    pub fn nextafter(x: f64, y: f64) -> f64;
    pub fn copysignf(x: f32, y: f32) -> f32;
    pub fn nanf(tag: *const c_char) -> f32;
    pub fn nextafterf(x: f32, y: f32) -> f32;

    // Maximum, minimum, positive difference, and fused multiply-add
    // (§7.12.12 and §7.12.13).
    pub fn fdim(x: f64, y: f64) -> f64;
    pub fn fma(x: f64, y: f64, z: f64) -> f64;
    pub fn fmax(x: f64, y: f64) -> f64;
    pub fn fmin(x: f64, y: f64) -> f64;
    pub fn fdimf(x: f32, y: f32) -> f32;
    pub fn fmaf(x: f32, y: f32, z: f32) -> f32;
    pub fn fmaxf(x: f32, y: f32) -> f32;
    pub fn fminf(x: f32, y: f32) -> f32;
}
