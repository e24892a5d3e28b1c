//! Prayer time solver.
//!
//! Times are found by fixed-point iteration: each time starts from a rough guess, and every
//! pass re-evaluates the sun position at the current guess. After the passes the times are
//! shifted to the requested zone, adjusted for high latitudes, completed with the
//! fixed-minute rules, Dhuhr offset and midnight, tuned, and finally formatted.

use log::{debug, trace};

use crate::astro::{Direction, asr_time, hour_angle_time, rise_set_angle, solar_noon};
use crate::error::check_utc_offset;
use crate::format::{DEFAULT_SUFFIXES, TimeFormat};
use crate::math::fix_hour;
use crate::method::{Method, MidnightMethod, Rule};
use crate::settings::{Adjustment, HighLatitudeRule, Offsets, Settings, TimeName};
use crate::time::{CalendarDate, JulianDate};
use crate::types::{Coordinates, PrayerTimeSet, RawTimes, UtcOffset};
use crate::{Error, Result};

/// Number of refinement passes.
///
/// Chosen empirically by the published PrayTimes algorithm rather than derived from a
/// convergence bound; three passes settle every time well below a second at ordinary
/// latitudes. Kept fixed so results are reproducible.
pub const ITERATIONS: usize = 3;

/// Initial guesses, in hours, for Imsak, Fajr, Sunrise, Dhuhr, Asr, Sunset, Maghrib, Isha.
///
/// Rough times of an average day; empirical like [`ITERATIONS`].
pub const SEED_TIMES: [f64; 8] = [5.0, 5.0, 6.0, 12.0, 13.0, 18.0, 18.0, 18.0];

/// Working set of the eight sun-derived times, `None` where undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DayTimes {
    imsak: Option<f64>,
    fajr: Option<f64>,
    sunrise: Option<f64>,
    dhuhr: Option<f64>,
    asr: Option<f64>,
    sunset: Option<f64>,
    maghrib: Option<f64>,
    isha: Option<f64>,
}

impl DayTimes {
    const fn seed() -> Self {
        let [imsak, fajr, sunrise, dhuhr, asr, sunset, maghrib, isha] = SEED_TIMES;
        Self {
            imsak: Some(imsak),
            fajr: Some(fajr),
            sunrise: Some(sunrise),
            dhuhr: Some(dhuhr),
            asr: Some(asr),
            sunset: Some(sunset),
            maghrib: Some(maghrib),
            isha: Some(isha),
        }
    }

    fn shift(self, hours: f64) -> Self {
        let add = |time: Option<f64>| time.map(|t| t + hours);
        Self {
            imsak: add(self.imsak),
            fajr: add(self.fajr),
            sunrise: add(self.sunrise),
            dhuhr: add(self.dhuhr),
            asr: add(self.asr),
            sunset: add(self.sunset),
            maghrib: add(self.maghrib),
            isha: add(self.isha),
        }
    }
}

/// Per-call inputs of the astronomical computation.
#[derive(Debug, Clone, Copy)]
struct Observer {
    /// Julian date of the day start, shifted to local mean time at the observer's longitude.
    jd: JulianDate,
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

impl Observer {
    fn new(date: CalendarDate, coords: Coordinates) -> Self {
        Self {
            jd: date
                .julian_date()
                .add_days(-coords.longitude() / (15.0 * 24.0)),
            latitude: coords.latitude(),
            longitude: coords.longitude(),
            elevation: coords.elevation(),
        }
    }

    fn angle_time(&self, angle: f64, guess: Option<f64>, direction: Direction) -> Option<f64> {
        hour_angle_time(angle, self.jd, guess? / 24.0, self.latitude, direction)
    }

    fn rule_time(&self, rule: Rule, guess: Option<f64>, direction: Direction) -> Option<f64> {
        match rule {
            Rule::Angle(angle) => self.angle_time(angle, guess, direction),
            // Fixed-minute rules are resolved after the iteration
            Rule::Minutes(_) => None,
        }
    }
}

/// Forward difference `b - a` wrapped into `[0, 24)` hours.
fn time_diff(a: f64, b: f64) -> f64 {
    fix_hour(b - a)
}

/// Prayer time calculator.
///
/// Holds the active [`Settings`], tuning [`Offsets`] and output format. Calculations
/// borrow it immutably, so one instance can serve many threads; changing the
/// configuration needs `&mut self`.
///
/// # Example
/// ```
/// use praytimes::{Method, PrayTimes, TimeFormat, UtcOffset};
///
/// let solver = PrayTimes::new(Method::Egypt);
/// let times = solver
///     .get_times(
///         [2024, 6, 21],
///         [30.0444, 31.2357],
///         UtcOffset::Hours(3.0),
///         UtcOffset::Hours(0.0),
///         Some(TimeFormat::H24),
///     )
///     .unwrap();
///
/// println!("Fajr {} Dhuhr {} Maghrib {}", times.fajr(), times.dhuhr(), times.maghrib());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PrayTimes {
    method: Option<Method>,
    settings: Settings,
    offsets: Offsets,
    format: TimeFormat,
    suffixes: Option<[&'static str; 2]>,
}

impl Default for PrayTimes {
    /// Umm Al-Qura (Makkah) settings with 12-hour `am`/`pm` output.
    fn default() -> Self {
        Self::new(Method::Makkah)
    }
}

impl PrayTimes {
    /// Creates a solver for a built-in method.
    #[must_use]
    pub const fn new(method: Method) -> Self {
        Self {
            method: Some(method),
            settings: Settings::from_method(method),
            offsets: Offsets::zero(),
            format: TimeFormat::H12,
            suffixes: Some(DEFAULT_SUFFIXES),
        }
    }

    /// Creates a solver from explicit settings not tied to a named method.
    #[must_use]
    pub const fn from_settings(settings: Settings) -> Self {
        Self {
            method: None,
            settings,
            offsets: Offsets::zero(),
            format: TimeFormat::H12,
            suffixes: Some(DEFAULT_SUFFIXES),
        }
    }

    /// Switches to a built-in method.
    ///
    /// Method parameters (Fajr, Isha, Maghrib, midnight) are replaced; Imsak, Dhuhr, Asr
    /// and the high-latitude rule keep their current values.
    pub fn set_method(&mut self, method: Method) {
        self.settings.apply_method(method);
        self.method = Some(method);
    }

    /// Switches to a built-in method by its code (`"MWL"`, `"ISNA"`, ...).
    ///
    /// # Errors
    /// Returns `UnknownMethod` for an unrecognized code; the settings are left unchanged.
    pub fn set_method_by_name(&mut self, name: &str) -> Result<()> {
        let method = name.parse::<Method>().inspect_err(|_| {
            log::warn!("rejecting unknown calculation method {name:?}");
        })?;
        self.set_method(method);
        Ok(())
    }

    /// Applies a partial settings change.
    ///
    /// # Errors
    /// Returns `InvalidParameter` for non-finite values; the settings are left unchanged.
    pub fn adjust(&mut self, adjustment: &Adjustment) -> Result<()> {
        self.settings.adjust(adjustment)
    }

    /// Merges minute offsets per time; times not mentioned keep their previous offset.
    ///
    /// # Errors
    /// Returns `InvalidParameter` for non-finite offsets; nothing is merged on error.
    pub fn tune<I>(&mut self, offsets: I) -> Result<()>
    where
        I: IntoIterator<Item = (TimeName, f64)>,
    {
        self.offsets.tune(offsets)
    }

    /// Sets the default output format.
    pub fn set_format(&mut self, format: TimeFormat) {
        self.format = format;
    }

    /// Sets the 12-hour clock suffixes, or `None` to omit them.
    pub fn set_suffixes(&mut self, suffixes: Option<[&'static str; 2]>) {
        self.suffixes = suffixes;
    }

    /// The active built-in method, or `None` when built from custom settings.
    #[must_use]
    pub const fn method(&self) -> Option<Method> {
        self.method
    }

    /// The active settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The tuning offsets in minutes.
    #[must_use]
    pub const fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    /// The default output format.
    #[must_use]
    pub const fn format(&self) -> TimeFormat {
        self.format
    }

    /// Computes the times of one day.
    ///
    /// `timezone` is the standard UTC offset and `dst` the daylight saving shift, both in
    /// hours; [`UtcOffset::Auto`] derives them from the host's local time zone. `format`
    /// defaults to [`PrayTimes::format`].
    ///
    /// # Errors
    /// Returns an error for an invalid date, coordinates or offset, or `AutoOffsetUnavailable`
    /// when an automatic offset is requested without the `clock` feature. Times that do not
    /// exist on this day are not errors; they are reported as invalid.
    pub fn get_times<D, C>(
        &self,
        date: D,
        coords: C,
        timezone: UtcOffset,
        dst: UtcOffset,
        format: Option<TimeFormat>,
    ) -> Result<PrayerTimeSet>
    where
        D: TryInto<CalendarDate>,
        C: TryInto<Coordinates>,
        Error: From<D::Error> + From<C::Error>,
    {
        let date = date.try_into()?;
        let coords = coords.try_into()?;
        let utc_offset = resolve_offset(date, timezone, dst)?;
        Ok(self.compute(date, coords, utc_offset).format(
            format.unwrap_or(self.format),
            self.suffixes,
        ))
    }

    /// Computes the times of one day in a chrono time zone.
    ///
    /// The standard offset and daylight saving shift are derived from `zone` for `date`,
    /// so half-hour shifts are honored.
    ///
    /// # Errors
    /// Returns an error for invalid coordinates, an invalid date, or a date chrono cannot
    /// represent.
    #[cfg(feature = "chrono")]
    pub fn get_times_in_zone<D, C, Tz>(
        &self,
        date: D,
        coords: C,
        zone: &Tz,
        format: Option<TimeFormat>,
    ) -> Result<PrayerTimeSet>
    where
        D: TryInto<CalendarDate>,
        C: TryInto<Coordinates>,
        Error: From<D::Error> + From<C::Error>,
        Tz: chrono::TimeZone,
    {
        let date = date.try_into()?;
        let standard = crate::zone::standard_offset(zone, date.year())?;
        let dst = crate::zone::dst_offset(zone, date)?;
        self.get_times(
            date,
            coords,
            UtcOffset::Hours(standard),
            UtcOffset::Hours(dst),
            format,
        )
    }

    /// Computes the unformatted times of one day, in hours since local midnight.
    ///
    /// # Errors
    /// Returns an error for an invalid date, coordinates or offset.
    pub fn raw_times<D, C>(&self, date: D, coords: C, utc_offset: f64) -> Result<RawTimes>
    where
        D: TryInto<CalendarDate>,
        C: TryInto<Coordinates>,
        Error: From<D::Error> + From<C::Error>,
    {
        check_utc_offset(utc_offset)?;
        Ok(self.compute(date.try_into()?, coords.try_into()?, utc_offset))
    }

    fn compute(&self, date: CalendarDate, coords: Coordinates, utc_offset: f64) -> RawTimes {
        let observer = Observer::new(date, coords);

        let mut times = DayTimes::seed();
        for pass in 1..=ITERATIONS {
            times = self.refine(&observer, &times);
            trace!("pass {pass}: {times:?}");
        }

        let mut times = times.shift(utc_offset - observer.longitude / 15.0);
        if self.settings.high_latitude != HighLatitudeRule::None {
            times = self.adjust_high_latitude(times);
        }
        self.apply_minute_rules(&mut times);
        times.dhuhr = times.dhuhr.map(|t| t + self.settings.dhuhr_minutes / 60.0);

        let midnight = self.midnight(&times);
        let mut raw = [
            times.imsak,
            times.fajr,
            times.sunrise,
            times.dhuhr,
            times.asr,
            times.sunset,
            times.maghrib,
            times.isha,
            midnight,
        ];
        for (time, (name, minutes)) in raw.iter_mut().zip(self.offsets.iter()) {
            // Non-finite settings or offsets set directly on the fields end up here
            *time = time.map(|t| t + minutes / 60.0).filter(|t| t.is_finite());
            if time.is_none() {
                debug!("{name} does not occur on {date:?} at {coords:?}");
            }
        }
        RawTimes::from_array(raw)
    }

    /// One refinement pass: re-evaluates every time at its current guess.
    fn refine(&self, observer: &Observer, times: &DayTimes) -> DayTimes {
        let settings = &self.settings;
        let horizon = rise_set_angle(observer.elevation);

        DayTimes {
            imsak: observer.rule_time(settings.imsak, times.imsak, Direction::BeforeNoon),
            fajr: observer.angle_time(settings.fajr, times.fajr, Direction::BeforeNoon),
            sunrise: observer.angle_time(horizon, times.sunrise, Direction::BeforeNoon),
            dhuhr: times
                .dhuhr
                .map(|guess| solar_noon(observer.jd, guess / 24.0)),
            asr: times.asr.and_then(|guess| {
                asr_time(
                    settings.asr.factor(),
                    observer.jd,
                    guess / 24.0,
                    observer.latitude,
                )
            }),
            sunset: observer.angle_time(horizon, times.sunset, Direction::AfterNoon),
            maghrib: observer.rule_time(settings.maghrib, times.maghrib, Direction::AfterNoon),
            isha: observer.rule_time(settings.isha, times.isha, Direction::AfterNoon),
        }
    }

    /// Keeps twilight times within a portion of the night from sunrise or sunset.
    ///
    /// Needs both sunrise and sunset; without them there is no night length to portion.
    fn adjust_high_latitude(&self, mut times: DayTimes) -> DayTimes {
        let (Some(sunrise), Some(sunset)) = (times.sunrise, times.sunset) else {
            return times;
        };
        let night = time_diff(sunset, sunrise);
        let settings = &self.settings;

        times.imsak = self.bound_to_night(
            TimeName::Imsak,
            times.imsak,
            sunrise,
            settings.imsak,
            night,
            Direction::BeforeNoon,
        );
        times.fajr = self.bound_to_night(
            TimeName::Fajr,
            times.fajr,
            sunrise,
            Rule::Angle(settings.fajr),
            night,
            Direction::BeforeNoon,
        );
        times.isha = self.bound_to_night(
            TimeName::Isha,
            times.isha,
            sunset,
            settings.isha,
            night,
            Direction::AfterNoon,
        );
        times.maghrib = self.bound_to_night(
            TimeName::Maghrib,
            times.maghrib,
            sunset,
            settings.maghrib,
            night,
            Direction::AfterNoon,
        );
        times
    }

    fn bound_to_night(
        &self,
        name: TimeName,
        time: Option<f64>,
        base: f64,
        rule: Rule,
        night: f64,
        direction: Direction,
    ) -> Option<f64> {
        // Fixed-minute rules are replaced afterwards anyway
        let Rule::Angle(angle) = rule else {
            return time;
        };
        let Some(portion) = self.settings.high_latitude.night_portion(angle) else {
            return time;
        };
        let portion = portion * night;
        let bound = match direction {
            Direction::BeforeNoon => base - portion,
            Direction::AfterNoon => base + portion,
        };

        let distance = time.map(|t| match direction {
            Direction::BeforeNoon => time_diff(t, base),
            Direction::AfterNoon => time_diff(base, t),
        });
        match distance {
            Some(distance) if distance <= portion => time,
            _ => {
                debug!(
                    "{name} bounded to {bound:.4} h ({:?}, night {night:.4} h)",
                    self.settings.high_latitude
                );
                Some(bound)
            }
        }
    }

    fn apply_minute_rules(&self, times: &mut DayTimes) {
        let settings = &self.settings;
        if let Rule::Minutes(minutes) = settings.imsak {
            times.imsak = times.fajr.map(|fajr| fajr - minutes / 60.0);
        }
        if let Rule::Minutes(minutes) = settings.maghrib {
            times.maghrib = times.sunset.map(|sunset| sunset + minutes / 60.0);
        }
        if let Rule::Minutes(minutes) = settings.isha {
            times.isha = times.maghrib.map(|maghrib| maghrib + minutes / 60.0);
        }
    }

    fn midnight(&self, times: &DayTimes) -> Option<f64> {
        let sunset = times.sunset?;
        let morning = match self.settings.midnight {
            MidnightMethod::Standard => times.sunrise?,
            MidnightMethod::Jafari => times.fajr?,
        };
        Some(sunset + time_diff(sunset, morning) / 2.0)
    }
}

/// Total UTC offset in hours for a date: standard offset plus daylight saving shift.
fn resolve_offset(date: CalendarDate, timezone: UtcOffset, dst: UtcOffset) -> Result<f64> {
    let standard = match timezone {
        UtcOffset::Hours(hours) => hours,
        UtcOffset::Auto => local_offsets(date)?.0,
    };
    let shift = match dst {
        UtcOffset::Hours(hours) => hours,
        UtcOffset::Auto => local_offsets(date)?.1,
    };
    let total = standard + shift;
    check_utc_offset(total)?;
    Ok(total)
}

#[cfg(feature = "clock")]
fn local_offsets(date: CalendarDate) -> Result<(f64, f64)> {
    crate::zone::local_offsets(date)
}

#[cfg(not(feature = "clock"))]
fn local_offsets(_date: CalendarDate) -> Result<(f64, f64)> {
    Err(Error::AutoOffsetUnavailable)
}
