//! Named high-precision mathematical constants.
//!
//! A fixed, read-only table of `f64` constants complementing the §7.12
//! functions. Each literal carries more decimal digits than `f64` can
//! represent; the compiler rounds to the nearest representable value.

/// π, the ratio of a circle's circumference to its diameter.
pub const PI: f64 = 3.141592653589793238462643383279502884197169399375105820975;

/// τ = 2π, the ratio of a circle's circumference to its radius.
pub const TAU: f64 = 6.283185307179586476925286766559005768394338798750211641949;

/// e, the base of natural logarithms.
pub const E: f64 = 2.718281828459045235360287471352662497757247093699959574966;

/// √2.
pub const SQRT_2: f64 = 1.414213562373095048801688724209698078569671875376948073176;

/// √3.
pub const SQRT_3: f64 = 1.732050807568877293527446341505872366942805253810380628055;

/// √5.
pub const SQRT_5: f64 = 2.236067977499789696409173668731276235440618359611525724270;

/// 1/√2.
pub const FRAC_1_SQRT_2: f64 = 0.707106781186547524400844362104849039284835937688474036588;

/// ln 2.
pub const LN_2: f64 = 0.693147180559945309417232121458176568075500134360255254120;

/// ln 10.
pub const LN_10: f64 = 2.302585092994045684017991454684364207601101488628772976033;

/// log₂ e.
pub const LOG2_E: f64 = 1.442695040888963407359924681001892137426645954152985934135;

/// log₁₀ e.
pub const LOG10_E: f64 = 0.434294481903251827651128918916605082294397005803666566114;

/// log₂ 10.
pub const LOG2_10: f64 = 3.321928094887362347870319429489390175864831393024580612054;

/// φ, the golden ratio, (1 + √5)/2.
pub const PHI: f64 = 1.618033988749894848204586834365638117720309179805762862135;

/// γ, the Euler–Mascheroni constant, the limiting difference between the
/// harmonic series and the natural logarithm.
pub const EGAMMA: f64 = 0.577215664901532860606512090082402431042159335939923598805;

/// π/180, the factor converting degrees to radians.
pub const RADIANS_PER_DEGREE: f64 = 0.017453292519943295769236907684886127134428718885417254560;

/// 180/π, the factor converting radians to degrees.
pub const DEGREES_PER_RADIAN: f64 = 57.29577951308232087679815481410517033240547246656432154916;

/// π/2.
pub const FRAC_PI_2: f64 = 1.570796326794896619231321691639751442098584699687552910487;

/// π/3.
pub const FRAC_PI_3: f64 = 1.047197551196597746154214461093167628065723133125035273657;

/// π/4.
pub const FRAC_PI_4: f64 = 0.785398163397448309615660845819875721049292349843776455243;

/// π/6.
pub const FRAC_PI_6: f64 = 0.523598775598298873077107230546583814032861566562517636829;

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn constants_match_the_standard_library_table() {
        assert_eq!(PI, core::f64::consts::PI);
        assert_eq!(TAU, core::f64::consts::TAU);
        assert_eq!(E, core::f64::consts::E);
        assert_eq!(SQRT_2, core::f64::consts::SQRT_2);
        assert_eq!(FRAC_1_SQRT_2, core::f64::consts::FRAC_1_SQRT_2);
        assert_eq!(LN_2, core::f64::consts::LN_2);
        assert_eq!(LN_10, core::f64::consts::LN_10);
        assert_eq!(LOG2_E, core::f64::consts::LOG2_E);
        assert_eq!(LOG10_E, core::f64::consts::LOG10_E);
        assert_eq!(LOG2_10, core::f64::consts::LOG2_10);
        assert_eq!(FRAC_PI_2, core::f64::consts::FRAC_PI_2);
        assert_eq!(FRAC_PI_3, core::f64::consts::FRAC_PI_3);
        assert_eq!(FRAC_PI_4, core::f64::consts::FRAC_PI_4);
        assert_eq!(FRAC_PI_6, core::f64::consts::FRAC_PI_6);
    }

    #[test]
    fn derived_relationships_hold() {
        assert_relative_eq!(SQRT_3 * SQRT_3, 3.0, max_relative = 1e-15);
        assert_relative_eq!(SQRT_5 * SQRT_5, 5.0, max_relative = 1e-15);
        assert_relative_eq!(PHI * PHI, PHI + 1.0, max_relative = 1e-15);
        assert_relative_eq!(PHI, (1.0 + SQRT_5) / 2.0, max_relative = 1e-15);
        assert_relative_eq!(
            RADIANS_PER_DEGREE * DEGREES_PER_RADIAN,
            1.0,
            max_relative = 1e-15
        );
        assert_relative_eq!(TAU, 2.0 * PI, max_relative = 1e-15);
        assert_relative_eq!(EGAMMA, 0.5772156649015329, max_relative = 1e-15);
    }
}
