//! Built-in calculation methods.
//!
//! Each method is a named convention fixing the Fajr and Isha twilight definitions and,
//! for the Shia methods, Maghrib and the midnight convention. The tables are `const`
//! and fully resolved: defaults are merged at construction, nothing is patched at runtime.

use core::fmt;
use core::str::FromStr;

use crate::{Error, Result};

/// How a time is derived: from a sun depression angle or a fixed number of minutes.
///
/// For Imsak the minutes count back from Fajr; for Maghrib they count from sunset and
/// for Isha from Maghrib.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    /// Sun depression angle in degrees below the horizon.
    Angle(f64),
    /// Fixed number of minutes relative to the reference time.
    Minutes(f64),
}

impl Rule {
    /// The numeric value regardless of the unit (degrees or minutes).
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Angle(v) | Self::Minutes(v) => *v,
        }
    }

    /// Whether this rule is a fixed-minute rule.
    #[must_use]
    pub const fn is_minutes(&self) -> bool {
        matches!(self, Self::Minutes(_))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Angle(degrees) => write!(f, "{degrees}°"),
            Self::Minutes(minutes) => write!(f, "{minutes} min"),
        }
    }
}

/// Convention for computing the middle of the night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MidnightMethod {
    /// Midpoint between sunset and sunrise.
    #[default]
    Standard,
    /// Midpoint between sunset and Fajr.
    Jafari,
}

/// Fully resolved parameters of a calculation method.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodParams {
    /// Fajr depression angle in degrees.
    pub fajr: f64,
    /// Isha rule.
    pub isha: Rule,
    /// Maghrib rule.
    pub maghrib: Rule,
    /// Midnight convention.
    pub midnight: MidnightMethod,
}

/// Parameters a method may leave unspecified.
#[derive(Debug, Clone, Copy)]
struct PartialParams {
    fajr: f64,
    isha: Rule,
    maghrib: Option<Rule>,
    midnight: Option<MidnightMethod>,
}

const DEFAULT_MAGHRIB: Rule = Rule::Minutes(0.0);
const DEFAULT_MIDNIGHT: MidnightMethod = MidnightMethod::Standard;

/// Fills the unspecified parameters with the defaults shared by all methods.
const fn resolve(params: PartialParams) -> MethodParams {
    MethodParams {
        fajr: params.fajr,
        isha: params.isha,
        maghrib: match params.maghrib {
            Some(rule) => rule,
            None => DEFAULT_MAGHRIB,
        },
        midnight: match params.midnight {
            Some(midnight) => midnight,
            None => DEFAULT_MIDNIGHT,
        },
    }
}

const MWL: MethodParams = resolve(PartialParams {
    fajr: 18.0,
    isha: Rule::Angle(17.0),
    maghrib: None,
    midnight: None,
});

const ISNA: MethodParams = resolve(PartialParams {
    fajr: 15.0,
    isha: Rule::Angle(15.0),
    maghrib: None,
    midnight: None,
});

const EGYPT: MethodParams = resolve(PartialParams {
    fajr: 19.5,
    isha: Rule::Angle(17.5),
    maghrib: None,
    midnight: None,
});

const MAKKAH: MethodParams = resolve(PartialParams {
    fajr: 18.5,
    isha: Rule::Minutes(90.0),
    maghrib: None,
    midnight: None,
});

const KARACHI: MethodParams = resolve(PartialParams {
    fajr: 18.0,
    isha: Rule::Angle(18.0),
    maghrib: None,
    midnight: None,
});

const TEHRAN: MethodParams = resolve(PartialParams {
    fajr: 17.7,
    isha: Rule::Angle(14.0),
    maghrib: Some(Rule::Angle(4.5)),
    midnight: Some(MidnightMethod::Jafari),
});

const JAFARI: MethodParams = resolve(PartialParams {
    fajr: 16.0,
    isha: Rule::Angle(14.0),
    maghrib: Some(Rule::Angle(4.0)),
    midnight: Some(MidnightMethod::Jafari),
});

/// Built-in calculation methods.
///
/// # Example
/// ```
/// # use praytimes::{Method, Rule};
/// let method: Method = "Makkah".parse().unwrap();
/// assert_eq!(method.name(), "Umm Al-Qura University, Makkah");
/// assert_eq!(method.params().isha, Rule::Minutes(90.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Muslim World League
    Mwl,
    /// Islamic Society of North America
    Isna,
    /// Egyptian General Authority of Survey
    Egypt,
    /// Umm Al-Qura University, Makkah
    Makkah,
    /// University of Islamic Sciences, Karachi
    Karachi,
    /// Institute of Geophysics, University of Tehran
    Tehran,
    /// Shia Ithna-Ashari, Leva Institute, Qum
    Jafari,
}

impl Method {
    /// All built-in methods.
    pub const ALL: [Self; 7] = [
        Self::Mwl,
        Self::Isna,
        Self::Egypt,
        Self::Makkah,
        Self::Karachi,
        Self::Tehran,
        Self::Jafari,
    ];

    /// Display name of the method.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mwl => "Muslim World League",
            Self::Isna => "Islamic Society of North America (ISNA)",
            Self::Egypt => "Egyptian General Authority of Survey",
            Self::Makkah => "Umm Al-Qura University, Makkah",
            Self::Karachi => "University of Islamic Sciences, Karachi",
            Self::Tehran => "Institute of Geophysics, University of Tehran",
            Self::Jafari => "Shia Ithna-Ashari, Leva Institute, Qum",
        }
    }

    /// Short code of the method, as accepted by [`FromStr`].
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Mwl => "MWL",
            Self::Isna => "ISNA",
            Self::Egypt => "Egypt",
            Self::Makkah => "Makkah",
            Self::Karachi => "Karachi",
            Self::Tehran => "Tehran",
            Self::Jafari => "Jafari",
        }
    }

    /// Resolved parameters of the method.
    #[must_use]
    pub const fn params(&self) -> MethodParams {
        match self {
            Self::Mwl => MWL,
            Self::Isna => ISNA,
            Self::Egypt => EGYPT,
            Self::Makkah => MAKKAH,
            Self::Karachi => KARACHI,
            Self::Tehran => TEHRAN,
            Self::Jafari => JAFARI,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Method {
    type Err = Error;

    /// Parses a method code, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_method(s))
    }
}
