//! Core data types: observer coordinates, UTC offsets and the computed time records.

use crate::error::{check_coordinates, check_elevation};
use crate::format::{FormattedTime, TimeFormat, format_time};
use crate::settings::TimeName;
use crate::{Error, Result};

/// Observer location.
///
/// # Example
/// ```
/// # use praytimes::Coordinates;
/// let makkah = Coordinates::new(21.4225, 39.8262, 277.0).unwrap();
/// assert_eq!(makkah.elevation(), 277.0);
///
/// // Elevation defaults to sea level
/// let cairo: Coordinates = [30.0444, 31.2357].try_into().unwrap();
/// assert_eq!(cairo.elevation(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    elevation: f64,
}

impl Coordinates {
    /// Creates validated coordinates.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidElevation` for
    /// out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_elevation(elevation)?;
        Ok(Self {
            latitude,
            longitude,
            elevation,
        })
    }

    /// Gets the latitude in degrees (positive north).
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees (positive east).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the elevation in metres above sea level.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }
}

impl TryFrom<[f64; 2]> for Coordinates {
    type Error = Error;

    fn try_from([latitude, longitude]: [f64; 2]) -> Result<Self> {
        Self::new(latitude, longitude, 0.0)
    }
}

impl TryFrom<[f64; 3]> for Coordinates {
    type Error = Error;

    fn try_from([latitude, longitude, elevation]: [f64; 3]) -> Result<Self> {
        Self::new(latitude, longitude, elevation)
    }
}

impl TryFrom<(f64, f64)> for Coordinates {
    type Error = Error;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self> {
        Self::new(latitude, longitude, 0.0)
    }
}

impl TryFrom<(f64, f64, f64)> for Coordinates {
    type Error = Error;

    fn try_from((latitude, longitude, elevation): (f64, f64, f64)) -> Result<Self> {
        Self::new(latitude, longitude, elevation)
    }
}

/// A UTC offset in hours, or a request to derive it from the local time zone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UtcOffset {
    /// Derive from the host's local time zone (needs the `clock` feature).
    #[default]
    Auto,
    /// Fixed offset in hours (e.g. `5.5` for India, `-5.0` for New York standard time).
    Hours(f64),
}

impl From<f64> for UtcOffset {
    fn from(hours: f64) -> Self {
        Self::Hours(hours)
    }
}

/// Computed times in local hours, after tuning and before formatting.
///
/// `None` marks a time that does not exist on the day (the sun never reaches the
/// required angle). Values are not wrapped into `[0, 24)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTimes([Option<f64>; 9]);

impl RawTimes {
    pub(crate) const fn from_array(times: [Option<f64>; 9]) -> Self {
        Self(times)
    }

    /// Gets a time in hours, or `None` if it does not exist.
    #[must_use]
    pub const fn get(&self, name: TimeName) -> Option<f64> {
        self.0[name.index()]
    }

    /// Iterates over `(name, hours)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (TimeName, Option<f64>)> + '_ {
        TimeName::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Formats every time.
    #[must_use]
    pub fn format(&self, format: TimeFormat, suffixes: Option<[&str; 2]>) -> PrayerTimeSet {
        PrayerTimeSet {
            times: self.0.map(|time| format_time(time, format, suffixes)),
        }
    }
}

/// The nine formatted times of one day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerTimeSet {
    times: [FormattedTime; 9],
}

impl PrayerTimeSet {
    /// Gets a formatted time by name.
    #[must_use]
    pub const fn get(&self, name: TimeName) -> &FormattedTime {
        &self.times[name.index()]
    }

    /// Iterates over `(name, time)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (TimeName, &FormattedTime)> + '_ {
        TimeName::ALL.into_iter().zip(self.times.iter())
    }

    /// Imsak, the start of the pre-dawn fast.
    #[must_use]
    pub const fn imsak(&self) -> &FormattedTime {
        self.get(TimeName::Imsak)
    }

    /// Fajr, dawn.
    #[must_use]
    pub const fn fajr(&self) -> &FormattedTime {
        self.get(TimeName::Fajr)
    }

    /// Sunrise.
    #[must_use]
    pub const fn sunrise(&self) -> &FormattedTime {
        self.get(TimeName::Sunrise)
    }

    /// Dhuhr, just after solar noon.
    #[must_use]
    pub const fn dhuhr(&self) -> &FormattedTime {
        self.get(TimeName::Dhuhr)
    }

    /// Asr, afternoon.
    #[must_use]
    pub const fn asr(&self) -> &FormattedTime {
        self.get(TimeName::Asr)
    }

    /// Sunset.
    #[must_use]
    pub const fn sunset(&self) -> &FormattedTime {
        self.get(TimeName::Sunset)
    }

    /// Maghrib, evening.
    #[must_use]
    pub const fn maghrib(&self) -> &FormattedTime {
        self.get(TimeName::Maghrib)
    }

    /// Isha, night.
    #[must_use]
    pub const fn isha(&self) -> &FormattedTime {
        self.get(TimeName::Isha)
    }

    /// Midnight.
    #[must_use]
    pub const fn midnight(&self) -> &FormattedTime {
        self.get(TimeName::Midnight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_coordinates_creation() {
        let coords = Coordinates::new(51.5, -0.12, 35.0).unwrap();
        assert_eq!(coords.latitude(), 51.5);
        assert_eq!(coords.longitude(), -0.12);
        assert_eq!(coords.elevation(), 35.0);

        assert!(Coordinates::new(90.5, 0.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, 200.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_coordinates_conversions() {
        let two: Coordinates = [30.0, 31.0].try_into().unwrap();
        let three: Coordinates = [30.0, 31.0, 0.0].try_into().unwrap();
        let tuple: Coordinates = (30.0, 31.0).try_into().unwrap();
        assert_eq!(two, three);
        assert_eq!(two, tuple);

        let high: Coordinates = (30.0, 31.0, 1200.0).try_into().unwrap();
        assert_eq!(high.elevation(), 1200.0);

        assert!(Coordinates::try_from([-95.0, 0.0]).is_err());
    }

    #[test]
    fn test_raw_times_format() {
        let mut times = [Some(12.0); 9];
        times[TimeName::Fajr.index()] = None;
        let raw = RawTimes::from_array(times);

        assert_eq!(raw.get(TimeName::Dhuhr), Some(12.0));
        assert_eq!(raw.get(TimeName::Fajr), None);

        let set = raw.format(TimeFormat::H24, None);
        assert_eq!(set.dhuhr().to_string(), "12:00");
        assert_eq!(*set.fajr(), FormattedTime::Invalid);
        assert_eq!(set.iter().count(), 9);
        assert_eq!(set.iter().filter(|(_, time)| !time.is_valid()).count(), 1);
    }

    #[test]
    fn test_utc_offset_from_hours() {
        assert_eq!(UtcOffset::from(3.5), UtcOffset::Hours(3.5));
        assert_eq!(UtcOffset::default(), UtcOffset::Auto);
    }
}
