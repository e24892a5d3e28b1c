//! Degree-based trigonometry and range fixing for the prayer time calculations.
//!
//! Every public angle in this crate is in degrees; conversion to radians happens only here.

#[cfg(not(feature = "std"))]
use libm;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wraps `value` into `[0, period)`, the Euclidean remainder
/// `value - period * floor(value / period)`.
///
/// A plain `%` keeps the sign of the dividend, which breaks times just before midnight.
/// The remainder is computed exactly, so the range holds for any finite input.
pub fn fix(value: f64, period: f64) -> f64 {
    let fixed = rem_euclid(value, period);
    // A tiny negative value rounds up to exactly `period`
    if fixed >= period { 0.0 } else { fixed }
}

/// Wraps an angle into `[0, 360)` degrees.
#[inline]
pub fn fix_angle(degrees: f64) -> f64 {
    fix(degrees, 360.0)
}

/// Wraps a time of day into `[0, 24)` hours.
#[inline]
pub fn fix_hour(hours: f64) -> f64 {
    fix(hours, 24.0)
}

/// Sine of an angle in degrees.
#[inline]
pub fn dsin(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle in degrees.
#[inline]
pub fn dcos(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Tangent of an angle in degrees.
#[inline]
pub fn dtan(degrees: f64) -> f64 {
    tan(degrees_to_radians(degrees))
}

/// Arcsine returning degrees.
#[inline]
pub fn darcsin(x: f64) -> f64 {
    radians_to_degrees(asin(x))
}

/// Arccosine returning degrees. NaN outside `[-1, 1]`; callers check the domain first.
#[inline]
pub fn darccos(x: f64) -> f64 {
    radians_to_degrees(acos(x))
}

/// Arccotangent returning degrees.
#[inline]
pub fn darccot(x: f64) -> f64 {
    radians_to_degrees(atan(1.0 / x))
}

/// Two-argument arctangent returning degrees.
#[inline]
pub fn darctan2(y: f64, x: f64) -> f64 {
    radians_to_degrees(atan2(y, x))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes the non-negative remainder of x / y using the appropriate function for the
/// compilation target.
#[inline]
pub fn rem_euclid(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.rem_euclid(y);

    #[cfg(not(feature = "std"))]
    {
        let r = libm::fmod(x, y);
        return if r < 0.0 { r + y.abs() } else { r };
    }
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_trigonometry() {
        assert!(dsin(0.0).abs() < EPSILON);
        assert!((dsin(90.0) - 1.0).abs() < EPSILON);
        assert!((dcos(60.0) - 0.5).abs() < EPSILON);
        assert!((dtan(45.0) - 1.0).abs() < EPSILON);

        assert!((darcsin(1.0) - 90.0).abs() < EPSILON);
        assert!((darccos(0.5) - 60.0).abs() < EPSILON);
        assert!((darccot(1.0) - 45.0).abs() < EPSILON);
        assert!((darctan2(1.0, -1.0) - 135.0).abs() < EPSILON);
    }

    #[test]
    fn test_darccos_outside_domain() {
        assert!(darccos(1.5).is_nan());
        assert!(darccos(-1.0000001).is_nan());
    }

    #[test]
    fn test_fix_angle() {
        assert_eq!(fix_angle(0.0), 0.0);
        assert_eq!(fix_angle(90.0), 90.0);
        assert_eq!(fix_angle(360.0), 0.0);
        assert_eq!(fix_angle(450.0), 90.0);
        assert_eq!(fix_angle(-90.0), 270.0);
        assert_eq!(fix_angle(-360.0), 0.0);
        assert_eq!(fix_angle(-720.5), 359.5);
    }

    #[test]
    fn test_fix_hour() {
        assert_eq!(fix_hour(24.0), 0.0);
        assert_eq!(fix_hour(25.5), 1.5);
        assert_eq!(fix_hour(-0.5), 23.5);
        assert_eq!(fix_hour(-48.0), 0.0);
        assert_eq!(fix_hour(12.25), 12.25);
    }

    #[test]
    fn test_fix_large_values_stay_in_range() {
        for value in [1.724_879_422_413_785_5e140, -3.9e200, f64::MAX, f64::MIN, 1e17 + 0.5] {
            let hours = fix_hour(value);
            assert!((0.0..24.0).contains(&hours), "{value} -> {hours}");
            let degrees = fix_angle(value);
            assert!((0.0..360.0).contains(&degrees), "{value} -> {degrees}");
        }
        // Exact for integers beyond 2^53
        assert_eq!(fix_hour(1_152_921_504_606_846_976.0), 16.0); // 2^60
    }

    #[test]
    fn test_fix_tiny_negative_stays_in_range() {
        let fixed = fix_hour(-1e-17);
        assert!((0.0..24.0).contains(&fixed), "got {fixed}");
    }
}
