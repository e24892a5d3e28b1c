//! Low-precision solar ephemeris and the sun-angle time equations.
//!
//! The sun position follows the approximate algorithm published by the U.S. Naval
//! Observatory ("Approximate Solar Coordinates"), accurate to about one arcminute within
//! two centuries of 2000. That is well inside the precision of prayer times, which are
//! reported to the minute.
//!
//! All angles are in degrees and all times in hours.

#![allow(clippy::unreadable_literal)]

use crate::math::{darccos, darccot, darcsin, darctan2, dcos, dsin, dtan, fix_angle, fix_hour, sqrt};
use crate::time::JulianDate;

/// Sun depression angle for sunrise and sunset at sea level (refraction plus solar radius).
pub const SUNRISE_SUNSET_ANGLE: f64 = 0.833;

/// Additional horizon dip per √metre of observer elevation.
const ELEVATION_DIP_FACTOR: f64 = 0.0347;

/// Declination and equation of time of the sun at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Declination in degrees.
    pub declination: f64,
    /// Equation of time in hours (apparent minus mean solar time).
    pub equation_of_time: f64,
}

/// Which side of solar noon a sun-angle event lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Morning events (Fajr, sunrise): `noon - t`.
    BeforeNoon,
    /// Afternoon and evening events (Asr, sunset, Isha): `noon + t`.
    AfterNoon,
}

/// Computes the sun's declination and the equation of time.
///
/// Depends only on the Julian date; no observer location is involved.
///
/// # Example
/// ```
/// # use praytimes::astro::sun_position;
/// # use praytimes::time::JulianDate;
/// // Near the June solstice the declination is close to +23.44°
/// let position = sun_position(JulianDate::new(2_460_482.5));
/// assert!((position.declination - 23.44).abs() < 0.1);
/// ```
#[must_use]
pub fn sun_position(jd: JulianDate) -> SunPosition {
    let d = jd.days_since_j2000();

    let g = fix_angle(357.529 + 0.98560028 * d); // mean anomaly
    let q = fix_angle(280.459 + 0.98564736 * d); // mean longitude
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g)); // ecliptic longitude

    let e = 23.439 - 0.00000036 * d; // obliquity of the ecliptic

    let right_ascension = darctan2(dcos(e) * dsin(l), dcos(l)) / 15.0;
    let equation_of_time = q / 15.0 - fix_hour(right_ascension);
    let declination = darcsin(dsin(e) * dsin(l));

    SunPosition {
        declination,
        equation_of_time,
    }
}

/// Solar noon in local mean hours for a day-fraction guess: `12 - equation_of_time`.
///
/// `jd` is the Julian date of the (longitude-shifted) day start; `day_fraction` the guess
/// in days since then.
#[must_use]
pub fn solar_noon(jd: JulianDate, day_fraction: f64) -> f64 {
    let eqt = sun_position(jd.add_days(day_fraction)).equation_of_time;
    fix_hour(12.0 - eqt)
}

/// Time at which the sun is `angle` degrees below the horizon.
///
/// Solves `cos(t) = (-sin(angle) - sin(decl)·sin(lat)) / (cos(decl)·cos(lat))` for the hour
/// angle `t` and returns `noon ∓ t/15` hours.
///
/// Returns `None` when the sun never reaches that angle on this day (the ratio lies
/// outside `[-1, 1]`, which happens in polar day or night and at the poles themselves).
#[must_use]
pub fn hour_angle_time(
    angle: f64,
    jd: JulianDate,
    day_fraction: f64,
    latitude: f64,
    direction: Direction,
) -> Option<f64> {
    let declination = sun_position(jd.add_days(day_fraction)).declination;
    let noon = solar_noon(jd, day_fraction);

    let ratio = (-dsin(angle) - dsin(declination) * dsin(latitude))
        / (dcos(declination) * dcos(latitude));
    if !ratio.is_finite() || !(-1.0..=1.0).contains(&ratio) {
        return None;
    }

    let t = darccos(ratio) / 15.0;
    Some(match direction {
        Direction::BeforeNoon => noon - t,
        Direction::AfterNoon => noon + t,
    })
}

/// Sun angle for Asr: the moment an object's shadow equals `factor` times its length plus
/// its noon shadow.
///
/// Returned as a depression angle (negative, since the sun is above the horizon), ready
/// for [`hour_angle_time`].
#[must_use]
pub fn asr_angle(factor: f64, latitude: f64, declination: f64) -> f64 {
    -darccot(factor + dtan((latitude - declination).abs()))
}

/// Time of Asr for the given shadow factor, or `None` if the sun never gets that low.
#[must_use]
pub fn asr_time(factor: f64, jd: JulianDate, day_fraction: f64, latitude: f64) -> Option<f64> {
    let declination = sun_position(jd.add_days(day_fraction)).declination;
    let angle = asr_angle(factor, latitude, declination);
    hour_angle_time(angle, jd, day_fraction, latitude, Direction::AfterNoon)
}

/// Depression angle of sunrise and sunset for an observer at `elevation` metres.
///
/// Negative elevations are treated as sea level.
#[must_use]
pub fn rise_set_angle(elevation: f64) -> f64 {
    SUNRISE_SUNSET_ANGLE + ELEVATION_DIP_FACTOR * sqrt(elevation.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::julian_day;

    #[test]
    fn test_sun_position_solstices_and_equinox() {
        let june = sun_position(JulianDate::new(julian_day(2024, 6, 20) + 0.5));
        assert!((june.declination - 23.44).abs() < 0.05, "{june:?}");

        let december = sun_position(JulianDate::new(julian_day(2024, 12, 21) + 0.5));
        assert!((december.declination + 23.44).abs() < 0.05, "{december:?}");

        let march = sun_position(JulianDate::new(julian_day(2024, 3, 20) + 0.5));
        assert!(march.declination.abs() < 0.5, "{march:?}");
    }

    #[test]
    fn test_equation_of_time_extremes() {
        // About +16.4 minutes in early November, about -14.2 minutes in mid February
        let november = sun_position(JulianDate::new(julian_day(2024, 11, 3)));
        assert!((november.equation_of_time * 60.0 - 16.4).abs() < 0.5);

        let february = sun_position(JulianDate::new(julian_day(2024, 2, 11)));
        assert!((february.equation_of_time * 60.0 + 14.2).abs() < 0.5);
    }

    #[test]
    fn test_solar_noon_range() {
        let jd = JulianDate::new(julian_day(2024, 11, 3));
        let noon = solar_noon(jd, 0.5);
        assert!((0.0..24.0).contains(&noon));
        assert!((noon - (12.0 - 16.4 / 60.0)).abs() < 0.02);
    }

    #[test]
    fn test_hour_angle_time_is_symmetric_about_noon() {
        let jd = JulianDate::new(julian_day(2024, 3, 20));
        let noon = solar_noon(jd, 0.5);
        let morning = hour_angle_time(0.833, jd, 0.5, 0.0, Direction::BeforeNoon).unwrap();
        let evening = hour_angle_time(0.833, jd, 0.5, 0.0, Direction::AfterNoon).unwrap();

        assert!(((noon - morning) - (evening - noon)).abs() < 1e-12);
        assert!((evening - morning - 12.1).abs() < 0.1);
    }

    #[test]
    fn test_hour_angle_time_polar_night_is_none() {
        // Svalbard in December: the sun never rises
        let jd = JulianDate::new(julian_day(2024, 12, 21));
        assert!(hour_angle_time(0.833, jd, 0.25, 78.2, Direction::BeforeNoon).is_none());
        // The pole itself divides by cos(90°) ≈ 0
        assert!(hour_angle_time(18.0, jd, 0.25, 90.0, Direction::BeforeNoon).is_none());
    }

    #[test]
    fn test_asr_angle() {
        // Sun overhead at noon: the standard Asr angle is arccot(1) = 45° above the horizon
        assert!((asr_angle(1.0, 10.0, 10.0) + 45.0).abs() < 1e-10);
        // Hanafi shadow is longer, so the sun is lower
        assert!(asr_angle(2.0, 10.0, 10.0) > asr_angle(1.0, 10.0, 10.0));
    }

    #[test]
    fn test_rise_set_angle() {
        assert_eq!(rise_set_angle(0.0), 0.833);
        assert!((rise_set_angle(100.0) - (0.833 + 0.347)).abs() < 1e-12);
        assert_eq!(rise_set_angle(-50.0), 0.833);
    }
}
