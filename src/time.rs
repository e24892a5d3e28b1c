//! Calendar dates and Julian dates.
//!
//! Dates are proleptic Gregorian throughout; there is no switch to the Julian calendar
//! before 1582 and no leap-second handling.

use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
pub(crate) const J2000_JDN: f64 = 2_451_545.0;

/// A validated proleptic Gregorian calendar date.
///
/// # Example
/// ```
/// # use praytimes::time::CalendarDate;
/// let date = CalendarDate::new(2024, 3, 20).unwrap();
/// assert_eq!(date.month(), 3);
///
/// let from_triple: CalendarDate = [2024, 3, 20].try_into().unwrap();
/// assert_eq!(date, from_triple);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Creates a calendar date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12 or the day does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the Julian date at 0h UT of this calendar day.
    #[must_use]
    pub fn julian_date(&self) -> JulianDate {
        JulianDate::from_calendar(*self)
    }
}

impl TryFrom<[i32; 3]> for CalendarDate {
    type Error = Error;

    fn try_from([year, month, day]: [i32; 3]) -> Result<Self> {
        let month = u32::try_from(month)
            .map_err(|_| Error::invalid_date("month must be between 1 and 12"))?;
        let day =
            u32::try_from(day).map_err(|_| Error::invalid_date("day is out of range for month"))?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u32, u32)> for CalendarDate {
    type Error = Error;

    fn try_from((year, month, day): (i32, u32, u32)) -> Result<Self> {
        Self::new(year, month, day)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for CalendarDate {
    fn from(date: chrono::NaiveDate) -> Self {
        Self::from_date_like(&date)
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> From<chrono::DateTime<Tz>> for CalendarDate {
    /// Uses the local calendar date of the datetime, not the UTC date.
    fn from(datetime: chrono::DateTime<Tz>) -> Self {
        Self::from_date_like(&datetime)
    }
}

#[cfg(feature = "chrono")]
impl CalendarDate {
    /// Creates a calendar date from any chrono type implementing `Datelike`.
    ///
    /// chrono only produces valid dates, so no validation is needed.
    pub fn from_date_like<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

/// Julian date (continuous day count) used as the time axis for the solar formulas.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDate(f64);

impl JulianDate {
    /// Creates a Julian date from a raw day count.
    #[must_use]
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    /// Julian date at 0h UT of the given calendar day.
    #[must_use]
    pub fn from_calendar(date: CalendarDate) -> Self {
        Self(julian_day(date.year, date.month, date.day))
    }

    /// Gets the Julian Date value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.0
    }

    /// Days elapsed since the J2000.0 epoch.
    #[must_use]
    pub fn days_since_j2000(&self) -> f64 {
        self.0 - J2000_JDN
    }

    /// Returns this date shifted by a (possibly fractional) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }
}

/// Calculates the Julian date at 0h UT for a Gregorian calendar day.
///
/// Meeus, "Astronomical Algorithms", chapter 7. January and February count as
/// months 13 and 14 of the previous year.
///
/// # Example
/// ```
/// # use praytimes::time::julian_day;
/// assert_eq!(julian_day(2000, 1, 1), 2_451_544.5);
/// ```
#[must_use]
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (mut y, mut m) = (f64::from(year), f64::from(month));
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(day) + b - 1524.5
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_specific_julian_days() {
        // Unix epoch
        assert!((julian_day(1970, 1, 1) - 2_440_587.5).abs() < EPSILON);
        // Y2K
        assert!((julian_day(2000, 1, 1) - 2_451_544.5).abs() < EPSILON);
        // Meeus example 7.a: 1957 October 4.81 → 2436116.31
        assert!((julian_day(1957, 10, 4) + 0.81 - 2_436_116.31).abs() < 1e-6);
        // Leap day and the day after
        assert!((julian_day(2024, 3, 1) - julian_day(2024, 2, 29) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_julian_date_offsets() {
        let jd = CalendarDate::new(2000, 1, 1).unwrap().julian_date();
        assert!((jd.add_days(0.5).days_since_j2000()).abs() < EPSILON);
    }

    #[test]
    fn test_calendar_date_validation() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(1900, 2, 29).is_err());
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
        assert!(CalendarDate::new(2024, 13, 1).is_err());
        assert!(CalendarDate::new(2024, 0, 1).is_err());
        assert!(CalendarDate::new(2024, 4, 31).is_err());
        assert!(CalendarDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn test_calendar_date_conversions() {
        let date = CalendarDate::new(2025, 7, 4).unwrap();
        assert_eq!(CalendarDate::try_from([2025, 7, 4]).unwrap(), date);
        assert_eq!(CalendarDate::try_from((2025, 7, 4)).unwrap(), date);
        assert!(CalendarDate::try_from([2025, -1, 4]).is_err());
        assert!(CalendarDate::try_from([2025, 7, -4]).is_err());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_calendar_date_from_chrono() {
        use chrono::{DateTime, FixedOffset, NaiveDate};

        let naive = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(
            CalendarDate::from(naive),
            CalendarDate::new(2025, 7, 4).unwrap()
        );

        // Local date, even though it is already July 5 in UTC
        let datetime = "2025-07-04T22:00:00-05:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        assert_eq!(
            CalendarDate::from(datetime),
            CalendarDate::new(2025, 7, 4).unwrap()
        );
    }
}
