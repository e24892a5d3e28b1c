//! Active calculation settings and per-time tuning offsets.

use core::fmt;
use core::str::FromStr;

use crate::method::{Method, MidnightMethod, Rule};
use crate::{Error, Result};

/// Juristic convention for the Asr shadow factor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsrFactor {
    /// Shafi'i, Maliki, Hanbali: shadow length equals object length (factor 1).
    #[default]
    Standard,
    /// Hanafi: shadow length is twice the object length (factor 2).
    Hanafi,
    /// Any other shadow factor.
    Custom(f64),
}

impl AsrFactor {
    /// The numeric shadow factor.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Hanafi => 2.0,
            Self::Custom(factor) => *factor,
        }
    }
}

/// Adjustment applied to twilight times where the sun stays near the horizon all night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighLatitudeRule {
    /// Fajr and Isha no further than half the night from sunrise and sunset.
    #[default]
    NightMiddle,
    /// The night is split into 60 parts; the portion is `angle / 60` of the night.
    AngleBased,
    /// Fajr and Isha no further than a seventh of the night from sunrise and sunset.
    OneSeventh,
    /// No adjustment.
    None,
}

impl HighLatitudeRule {
    /// Fraction of the night within which a twilight time must lie.
    ///
    /// `value` is the configured angle (or minutes) of the time being adjusted; only
    /// [`HighLatitudeRule::AngleBased`] uses it. Returns `None` when no adjustment applies.
    #[must_use]
    pub fn night_portion(&self, value: f64) -> Option<f64> {
        match self {
            Self::NightMiddle => Some(0.5),
            Self::AngleBased => Some(value / 60.0),
            Self::OneSeventh => Some(1.0 / 7.0),
            Self::None => None,
        }
    }
}

/// Settings used by a single solver instance.
///
/// Built from a [`Method`] and then refined with [`Settings::adjust`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Imsak rule, normally a number of minutes before Fajr.
    pub imsak: Rule,
    /// Fajr depression angle in degrees.
    pub fajr: f64,
    /// Minutes added to solar noon for Dhuhr.
    pub dhuhr_minutes: f64,
    /// Asr shadow factor.
    pub asr: AsrFactor,
    /// High-latitude adjustment.
    pub high_latitude: HighLatitudeRule,
    /// Maghrib rule.
    pub maghrib: Rule,
    /// Isha rule.
    pub isha: Rule,
    /// Midnight convention.
    pub midnight: MidnightMethod,
}

impl Settings {
    /// Default Imsak: ten minutes before Fajr.
    pub const DEFAULT_IMSAK: Rule = Rule::Minutes(10.0);

    /// Settings for a method with the default Imsak, Dhuhr, Asr and high-latitude choices.
    #[must_use]
    pub const fn from_method(method: Method) -> Self {
        let params = method.params();
        Self {
            imsak: Self::DEFAULT_IMSAK,
            fajr: params.fajr,
            dhuhr_minutes: 0.0,
            asr: AsrFactor::Standard,
            high_latitude: HighLatitudeRule::NightMiddle,
            maghrib: params.maghrib,
            isha: params.isha,
            midnight: params.midnight,
        }
    }

    /// Replaces the method-specific parameters, keeping Imsak, Dhuhr, Asr and high-latitude.
    pub fn apply_method(&mut self, method: Method) {
        let params = method.params();
        self.fajr = params.fajr;
        self.isha = params.isha;
        self.maghrib = params.maghrib;
        self.midnight = params.midnight;
    }

    /// Merges an adjustment; unset fields keep their current value.
    ///
    /// # Errors
    /// Returns `InvalidParameter` for non-finite values or a non-positive Asr factor.
    /// The settings are unchanged on error.
    pub fn adjust(&mut self, adjustment: &Adjustment) -> Result<()> {
        adjustment.validate()?;
        let Adjustment {
            imsak,
            fajr,
            dhuhr_minutes,
            asr,
            high_latitude,
            maghrib,
            isha,
            midnight,
        } = *adjustment;

        self.imsak = imsak.unwrap_or(self.imsak);
        self.fajr = fajr.unwrap_or(self.fajr);
        self.dhuhr_minutes = dhuhr_minutes.unwrap_or(self.dhuhr_minutes);
        self.asr = asr.unwrap_or(self.asr);
        self.high_latitude = high_latitude.unwrap_or(self.high_latitude);
        self.maghrib = maghrib.unwrap_or(self.maghrib);
        self.isha = isha.unwrap_or(self.isha);
        self.midnight = midnight.unwrap_or(self.midnight);
        Ok(())
    }
}

impl From<Method> for Settings {
    fn from(method: Method) -> Self {
        Self::from_method(method)
    }
}

/// A partial change to [`Settings`].
///
/// # Example
/// ```
/// # use praytimes::{Adjustment, AsrFactor, HighLatitudeRule, Method, Rule, Settings};
/// let mut settings = Settings::from_method(Method::Mwl);
/// settings
///     .adjust(
///         &Adjustment::new()
///             .asr(AsrFactor::Hanafi)
///             .high_latitude(HighLatitudeRule::OneSeventh)
///             .isha(Rule::Minutes(90.0)),
///     )
///     .unwrap();
/// assert_eq!(settings.asr, AsrFactor::Hanafi);
/// assert_eq!(settings.fajr, 18.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[allow(missing_docs)]
pub struct Adjustment {
    pub imsak: Option<Rule>,
    pub fajr: Option<f64>,
    pub dhuhr_minutes: Option<f64>,
    pub asr: Option<AsrFactor>,
    pub high_latitude: Option<HighLatitudeRule>,
    pub maghrib: Option<Rule>,
    pub isha: Option<Rule>,
    pub midnight: Option<MidnightMethod>,
}

impl Adjustment {
    /// An adjustment that changes nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            imsak: None,
            fajr: None,
            dhuhr_minutes: None,
            asr: None,
            high_latitude: None,
            maghrib: None,
            isha: None,
            midnight: None,
        }
    }

    /// Sets the Imsak rule.
    #[must_use]
    pub const fn imsak(mut self, rule: Rule) -> Self {
        self.imsak = Some(rule);
        self
    }

    /// Sets the Fajr angle in degrees.
    #[must_use]
    pub const fn fajr(mut self, degrees: f64) -> Self {
        self.fajr = Some(degrees);
        self
    }

    /// Sets the minutes added to solar noon for Dhuhr.
    #[must_use]
    pub const fn dhuhr_minutes(mut self, minutes: f64) -> Self {
        self.dhuhr_minutes = Some(minutes);
        self
    }

    /// Sets the Asr shadow factor.
    #[must_use]
    pub const fn asr(mut self, factor: AsrFactor) -> Self {
        self.asr = Some(factor);
        self
    }

    /// Sets the high-latitude adjustment.
    #[must_use]
    pub const fn high_latitude(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude = Some(rule);
        self
    }

    /// Sets the Maghrib rule.
    #[must_use]
    pub const fn maghrib(mut self, rule: Rule) -> Self {
        self.maghrib = Some(rule);
        self
    }

    /// Sets the Isha rule.
    #[must_use]
    pub const fn isha(mut self, rule: Rule) -> Self {
        self.isha = Some(rule);
        self
    }

    /// Sets the midnight convention.
    #[must_use]
    pub const fn midnight(mut self, method: MidnightMethod) -> Self {
        self.midnight = Some(method);
        self
    }

    fn validate(&self) -> Result<()> {
        let rules = [self.imsak, self.maghrib, self.isha];
        if rules.iter().flatten().any(|rule| !rule.value().is_finite()) {
            return Err(Error::invalid_parameter("rule value must be finite"));
        }
        if self.fajr.is_some_and(|fajr| !fajr.is_finite()) {
            return Err(Error::invalid_parameter("Fajr angle must be finite"));
        }
        if self.dhuhr_minutes.is_some_and(|minutes| !minutes.is_finite()) {
            return Err(Error::invalid_parameter("Dhuhr minutes must be finite"));
        }
        if let Some(asr) = self.asr {
            let factor = asr.factor();
            if !factor.is_finite() || factor <= 0.0 {
                return Err(Error::invalid_parameter(
                    "Asr shadow factor must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Names of the computed times, in chronological order for an ordinary day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum TimeName {
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    Midnight,
}

impl TimeName {
    /// All time names, in output order.
    pub const ALL: [Self; 9] = [
        Self::Imsak,
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Sunset,
        Self::Maghrib,
        Self::Isha,
        Self::Midnight,
    ];

    /// Capitalized display name.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Imsak => "Imsak",
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Sunset => "Sunset",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
            Self::Midnight => "Midnight",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TimeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for TimeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_parameter("unknown time name"))
    }
}

/// Signed minute offsets added to each time after all astronomical computation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offsets([f64; 9]);

impl Offsets {
    /// All offsets zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0.0; 9])
    }

    /// Offset in minutes for a time.
    #[must_use]
    pub const fn get(&self, name: TimeName) -> f64 {
        self.0[name.index()]
    }

    /// Sets the offset in minutes for a time.
    ///
    /// Unchecked: a non-finite offset makes that time invalid. [`Offsets::tune`] rejects them.
    pub fn set(&mut self, name: TimeName, minutes: f64) {
        self.0[name.index()] = minutes;
    }

    /// Merges partial overrides; times not mentioned keep their previous offset.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if any offset is not finite. Nothing is merged on error.
    pub fn tune<I>(&mut self, offsets: I) -> Result<()>
    where
        I: IntoIterator<Item = (TimeName, f64)>,
    {
        let mut merged = *self;
        for (name, minutes) in offsets {
            if !minutes.is_finite() {
                return Err(Error::invalid_parameter("tuning offset must be finite"));
            }
            merged.set(name, minutes);
        }
        *self = merged;
        Ok(())
    }

    /// Iterates over `(name, minutes)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (TimeName, f64)> + '_ {
        TimeName::ALL.into_iter().zip(self.0.iter().copied())
    }
}
