//! UTC offset and daylight saving detection for chrono time zones.
//!
//! The standard offset of a zone is taken as the smaller of its offsets on January 1 and
//! July 1. This works in both hemispheres, since daylight saving always adds time.

use chrono::{LocalResult, NaiveDate, Offset, TimeZone};

use crate::time::CalendarDate;
use crate::{Error, Result};

/// Offset of `zone` from UTC, in hours, at 12:00 local time on `date`.
///
/// For local times that are skipped or repeated by a transition, the earliest valid
/// mapping is used.
///
/// # Errors
/// Returns `InvalidDate` if chrono cannot represent the date (years beyond ±262143).
pub fn utc_offset_hours<Tz: TimeZone>(zone: &Tz, date: CalendarDate) -> Result<f64> {
    let midday = NaiveDate::from_ymd_opt(date.year(), date.month(), date.day())
        .and_then(|day| day.and_hms_opt(12, 0, 0))
        .ok_or(Error::invalid_date("date is outside the range of chrono time zones"))?;

    let offset = match zone.offset_from_local_datetime(&midday) {
        LocalResult::Single(offset) | LocalResult::Ambiguous(offset, _) => offset,
        // No transition lasts 12 hours; fall back to the UTC interpretation
        LocalResult::None => zone.offset_from_utc_datetime(&midday),
    };
    Ok(f64::from(offset.fix().local_minus_utc()) / 3600.0)
}

/// Standard (non-DST) offset of `zone` for `year`, in hours.
///
/// # Errors
/// Returns `InvalidDate` if chrono cannot represent the year.
///
/// # Example
/// ```
/// # use praytimes::zone::standard_offset;
/// use chrono::FixedOffset;
///
/// let india = FixedOffset::east_opt(19_800).unwrap();
/// assert_eq!(standard_offset(&india, 2024), Ok(5.5));
/// ```
pub fn standard_offset<Tz: TimeZone>(zone: &Tz, year: i32) -> Result<f64> {
    let january = utc_offset_hours(zone, CalendarDate::new(year, 1, 1)?)?;
    let july = utc_offset_hours(zone, CalendarDate::new(year, 7, 1)?)?;
    Ok(january.min(july))
}

/// Daylight saving shift of `zone` on `date`, in hours: the offset at 12:00 local time
/// minus the standard offset.
///
/// Usually `0.0` or `1.0`, but half-hour shifts (Lord Howe Island) are reported as `0.5`.
///
/// # Errors
/// Returns `InvalidDate` if chrono cannot represent the date.
pub fn dst_offset<Tz: TimeZone>(zone: &Tz, date: CalendarDate) -> Result<f64> {
    Ok(utc_offset_hours(zone, date)? - standard_offset(zone, date.year())?)
}

/// Standard offset and DST shift of the host's local time zone.
#[cfg(feature = "clock")]
pub(crate) fn local_offsets(date: CalendarDate) -> Result<(f64, f64)> {
    let local = chrono::Local;
    Ok((
        standard_offset(&local, date.year())?,
        dst_offset(&local, date)?,
    ))
}
