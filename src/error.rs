//! Error types for the prayer time library.

use alloc::string::String;
use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while configuring the solver or validating its inputs.
///
/// A time slot whose sun angle is never reached on a given day is *not* an error;
/// it is reported per slot as an invalid time.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid observer elevation.
    InvalidElevation {
        /// The invalid elevation value provided.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// Invalid calculation parameter (angle, minutes or factor).
    InvalidParameter {
        /// Description of the parameter constraint violation.
        message: &'static str,
    },
    /// Calculation method name not found among the built-in methods.
    UnknownMethod {
        /// The name that was looked up.
        name: String,
    },
    /// Time format name not recognized.
    UnknownFormat {
        /// The name that was looked up.
        name: String,
    },
    /// An automatic UTC offset was requested but no local time zone is available.
    AutoOffsetUnavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevation { value } => {
                write!(f, "invalid elevation {value} m (must be finite)")
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            Self::InvalidParameter { message } => write!(f, "invalid parameter: {message}"),
            Self::UnknownMethod { name } => write!(f, "unknown calculation method '{name}'"),
            Self::UnknownFormat { name } => write!(f, "unknown time format '{name}'"),
            Self::AutoOffsetUnavailable => {
                write!(f, "automatic UTC offset requires the `clock` feature")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Lets already-validated inputs pass through the `TryInto` parameters of the solver
impl From<core::convert::Infallible> for Error {
    fn from(never: core::convert::Infallible) -> Self {
        match never {}
    }
}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates an invalid parameter error.
    #[must_use]
    pub const fn invalid_parameter(message: &'static str) -> Self {
        Self::InvalidParameter { message }
    }

    /// Creates an unknown method error.
    #[must_use]
    pub fn unknown_method(name: &str) -> Self {
        Self::UnknownMethod { name: name.into() }
    }

    /// Creates an unknown format error.
    #[must_use]
    pub fn unknown_format(name: &str) -> Self {
        Self::UnknownFormat { name: name.into() }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates elevation is a finite number of metres.
///
/// # Errors
/// Returns `InvalidElevation` for NaN or infinite elevation.
pub fn check_elevation(elevation: f64) -> Result<()> {
    if !elevation.is_finite() {
        return Err(Error::invalid_elevation(elevation));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates a UTC offset in hours.
///
/// # Errors
/// Returns `InvalidParameter` if the offset is not finite or beyond ±24 hours.
pub fn check_utc_offset(hours: f64) -> Result<()> {
    if !(-24.0..=24.0).contains(&hours) {
        return Err(Error::invalid_parameter(
            "UTC offset must be between -24 and +24 hours",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(21.4225).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(39.8262).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
    }

    #[test]
    fn test_elevation_and_offset_validation() {
        assert!(check_elevation(0.0).is_ok());
        assert!(check_elevation(-30.0).is_ok());
        assert!(check_elevation(f64::NAN).is_err());

        assert!(check_utc_offset(5.5).is_ok());
        assert!(check_utc_offset(-12.0).is_ok());
        assert!(check_utc_offset(25.0).is_err());
        assert!(check_utc_offset(f64::NAN).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::unknown_method("Mars");
        assert_eq!(err.to_string(), "unknown calculation method 'Mars'");

        let err = Error::invalid_date("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date: month must be between 1 and 12"
        );
    }
}
