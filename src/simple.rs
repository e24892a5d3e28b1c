//! Simplified prayer times from coordinates alone.
//!
//! A single evaluation of the sun position at the date's 0h UT, with 18° twilight for Fajr
//! and Isha, the standard Asr shadow factor and a sea-level horizon. There is no iteration,
//! no method selection and no high-latitude adjustment, so results can differ from
//! [`crate::PrayTimes`] by a minute or two. Suitable where only a rough timetable is needed.

use alloc::format;
use alloc::string::String;

use crate::astro::{SUNRISE_SUNSET_ANGLE, asr_angle, sun_position};
use crate::error::{check_coordinates, check_utc_offset};
use crate::math::{darccos, dcos, dsin, fix_hour, floor};
use crate::time::CalendarDate;
use crate::{Error, Result};

/// Twilight depression angle for both Fajr and Isha.
const TWILIGHT_ANGLE: f64 = 18.0;

/// Marker for a time that does not occur.
pub const MISSING_TIME: &str = "--:--";

/// Six daily times as `HH:MM` strings, [`MISSING_TIME`] where undefined.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct SimpleTimes {
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

/// Computes approximate prayer times.
///
/// `timezone` is the UTC offset in hours.
///
/// # Errors
/// Returns an error for invalid coordinates or a non-finite or out-of-range offset.
///
/// # Example
/// ```
/// # use praytimes::simple::prayer_times;
/// let times = prayer_times([2024, 3, 20], 21.4225, 39.8262, 3.0).unwrap();
/// assert_eq!(times.dhuhr, "12:28");
/// ```
pub fn prayer_times<D>(date: D, latitude: f64, longitude: f64, timezone: f64) -> Result<SimpleTimes>
where
    D: TryInto<CalendarDate>,
    Error: From<D::Error>,
{
    let date = date.try_into()?;
    check_coordinates(latitude, longitude)?;
    check_utc_offset(timezone)?;

    let sun = sun_position(date.julian_date());
    let decl = sun.declination;
    let noon = 12.0 + timezone - longitude / 15.0 - sun.equation_of_time;

    let half_arc = |angle: f64| {
        let ratio =
            (-dsin(angle) - dsin(decl) * dsin(latitude)) / (dcos(decl) * dcos(latitude));
        (-1.0..=1.0)
            .contains(&ratio)
            .then(|| darccos(ratio) / 15.0)
    };

    let twilight = half_arc(TWILIGHT_ANGLE);
    let horizon = half_arc(SUNRISE_SUNSET_ANGLE);
    let asr = half_arc(asr_angle(1.0, latitude, decl));

    Ok(SimpleTimes {
        fajr: clock(twilight.map(|t| noon - t)),
        sunrise: clock(horizon.map(|t| noon - t)),
        dhuhr: clock(Some(noon)),
        asr: clock(asr.map(|t| noon + t)),
        maghrib: clock(horizon.map(|t| noon + t)),
        isha: clock(twilight.map(|t| noon + t)),
    })
}

/// `HH:MM` rounded to the nearest minute.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clock(time: Option<f64>) -> String {
    let Some(time) = time.filter(|t| t.is_finite()) else {
        return MISSING_TIME.into();
    };
    let time = fix_hour(time);
    let mut hours = floor(time) as u32;
    let mut minutes = floor((time - floor(time)) * 60.0 + 0.5) as u32;
    if minutes == 60 {
        minutes = 0;
        hours = (hours + 1) % 24;
    }
    format!("{hours:02}:{minutes:02}")
}
