//! Output representations of computed times.

use alloc::format;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::math::{fix_hour, floor};
use crate::{Error, Result};

/// Marker printed for a time that does not exist on the requested day.
pub const INVALID_TIME: &str = "-----";

/// Default 12-hour clock suffixes.
pub const DEFAULT_SUFFIXES: [&str; 2] = ["am", "pm"];

/// How times are represented in a [`crate::PrayerTimeSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeFormat {
    /// `HH:MM`, zero padded.
    H24,
    /// `h:MM am`/`h:MM pm`.
    #[default]
    H12,
    /// `h:MM` on a 12-hour clock without suffix.
    H12NoSuffix,
    /// Raw floating-point hours.
    Float,
}

impl TimeFormat {
    /// Conventional short name (`24h`, `12h`, `12hNS`, `Float`).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::H24 => "24h",
            Self::H12 => "12h",
            Self::H12NoSuffix => "12hNS",
            Self::Float => "Float",
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for TimeFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        [Self::H24, Self::H12, Self::H12NoSuffix, Self::Float]
            .into_iter()
            .find(|format| format.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_format(s))
    }
}

/// A single formatted time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormattedTime {
    /// Hours since local midnight, not wrapped (may be negative or ≥ 24).
    Hours(f64),
    /// Clock text in the requested format.
    Clock(String),
    /// The time does not exist on this day.
    Invalid,
}

impl FormattedTime {
    /// Whether this time exists.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Raw hours, if this is a [`FormattedTime::Hours`] value.
    #[must_use]
    pub const fn hours(&self) -> Option<f64> {
        match self {
            Self::Hours(hours) => Some(*hours),
            _ => None,
        }
    }
}

impl fmt::Display for FormattedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours(hours) => fmt::Display::fmt(hours, f),
            Self::Clock(text) => f.pad(text),
            Self::Invalid => f.pad(INVALID_TIME),
        }
    }
}

/// Formats a time in hours.
///
/// `None` and non-finite values are [`FormattedTime::Invalid`]. Clock formats round to
/// the nearest minute and wrap into a single day. `suffixes` are used by
/// [`TimeFormat::H12`] only; pass `None` to omit them.
///
/// # Example
/// ```
/// # use praytimes::format::{format_time, TimeFormat, DEFAULT_SUFFIXES};
/// let time = 13.0 + 29.6 / 60.0;
/// assert_eq!(format_time(Some(time), TimeFormat::H24, None).to_string(), "13:30");
/// assert_eq!(
///     format_time(Some(time), TimeFormat::H12, Some(DEFAULT_SUFFIXES)).to_string(),
///     "1:30 pm"
/// );
/// assert_eq!(format_time(None, TimeFormat::H24, None).to_string(), "-----");
/// ```
#[must_use]
pub fn format_time(
    time: Option<f64>,
    format: TimeFormat,
    suffixes: Option<[&str; 2]>,
) -> FormattedTime {
    let Some(time) = time.filter(|t| t.is_finite()) else {
        return FormattedTime::Invalid;
    };
    let (hours, minutes) = clock_parts(time);
    let text = match format {
        TimeFormat::Float => return FormattedTime::Hours(time),
        TimeFormat::H24 => format!("{hours:02}:{minutes:02}"),
        TimeFormat::H12 | TimeFormat::H12NoSuffix => {
            let hour = (hours + 11) % 12 + 1;
            match suffixes.filter(|_| format == TimeFormat::H12) {
                Some(suffixes) => {
                    let suffix = suffixes[usize::from(hours >= 12)];
                    format!("{hour}:{minutes:02} {suffix}")
                }
                None => format!("{hour}:{minutes:02}"),
            }
        }
    };
    FormattedTime::Clock(text)
}

/// Splits a time into whole hours (0-23) and minutes (0-59), rounded to the nearest minute.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clock_parts(time: f64) -> (u32, u32) {
    let time = fix_hour(time + 0.5 / 60.0);
    let hours = floor(time);
    let minutes = floor((time - hours) * 60.0);
    // time < 24 so both values fit; min() guards the rounding edge just below a full hour
    (hours as u32, (minutes as u32).min(59))
}
