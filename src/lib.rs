//! # Prayer Times
//!
//! Astronomical calculation of the daily Islamic prayer times for any date and location.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! For a calendar date, observer coordinates and a UTC offset this library computes nine
//! times: Imsak, Fajr, Sunrise, Dhuhr, Asr, Sunset, Maghrib, Isha and Midnight. Twilight
//! depression angles and fixed-minute rules come from one of seven built-in calculation
//! conventions, or from custom settings.
//!
//! ## Features
//!
//! - Seven calculation methods: Muslim World League, ISNA, Egypt, Umm Al-Qura (Makkah),
//!   Karachi, Tehran and Shia Ithna Ashari (Jafari)
//! - Three high-latitude rules (night middle, angle-based, one-seventh) for locations where
//!   twilight angles are never reached
//! - Standard and Hanafi Asr, Jafari midnight, per-time minute tuning
//! - Time zones from a fixed offset, a `chrono` time zone, or the host's local zone
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Thread-safe: calculations borrow the solver immutably
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Accept `chrono` dates and time zones
//! - `clock` (default): Resolve [`UtcOffset::Auto`] from the host's local time zone
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for settings and results
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono + local time zone
//! praytimes = "0.1"
//!
//! # Minimal std (explicit UTC offsets only, smallest dependency tree)
//! praytimes = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! praytimes = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Times for a fixed offset
//! ```rust
//! use praytimes::{Method, PrayTimes, TimeFormat, UtcOffset};
//!
//! // Makkah on 2024-03-20, UTC+3, no daylight saving
//! let solver = PrayTimes::new(Method::Makkah);
//! let times = solver
//!     .get_times(
//!         [2024, 3, 20],
//!         [21.4225, 39.8262],
//!         UtcOffset::Hours(3.0),
//!         UtcOffset::Hours(0.0),
//!         Some(TimeFormat::H24),
//!     )
//!     .unwrap();
//!
//! for (name, time) in times.iter() {
//!     println!("{name:>8}: {time}");
//! }
//! ```
//!
//! ### Times in a chrono time zone
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{FixedOffset, NaiveDate};
//! use praytimes::{Method, PrayTimes};
//!
//! let karachi = FixedOffset::east_opt(5 * 3600).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let times = PrayTimes::new(Method::Karachi)
//!     .get_times_in_zone(date, [24.86, 67.01], &karachi, None)
//!     .unwrap();
//!
//! println!("Asr: {}", times.asr());
//! # }
//! ```
//!
//! ### Custom settings
//! ```rust
//! use praytimes::{Adjustment, AsrFactor, HighLatitudeRule, Method, PrayTimes, TimeName};
//!
//! let mut solver = PrayTimes::new(Method::Mwl);
//! solver
//!     .adjust(
//!         &Adjustment::new()
//!             .asr(AsrFactor::Hanafi)
//!             .high_latitude(HighLatitudeRule::OneSeventh),
//!     )
//!     .unwrap();
//! solver.tune([(TimeName::Fajr, 2.0), (TimeName::Isha, -3.0)]).unwrap();
//!
//! let raw = solver.raw_times([2024, 12, 1], [59.91, 10.75], 1.0).unwrap();
//! assert!(raw.get(TimeName::Fajr).is_some());
//! ```
//!
//! ## Algorithm
//!
//! Solar declination and the equation of time come from the low-precision formulas of the
//! U.S. Naval Observatory (about one arcminute). Each time is the instant the sun reaches a
//! given depression angle, found by three fixed-point passes that re-evaluate the sun
//! position at the current estimate. Solar noon is 12h minus the equation of time.
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, positive north (-90° to +90°)
//! - **Longitude**: degrees, positive east (-180° to +180°)
//! - **Times**: hours since local midnight; invalid where the sun never reaches the angle

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of table constants in tests
)]

extern crate alloc;

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::format::{FormattedTime, TimeFormat, format_time};
pub use crate::math::{fix_angle, fix_hour};
pub use crate::method::{Method, MethodParams, MidnightMethod, Rule};
pub use crate::settings::{Adjustment, AsrFactor, HighLatitudeRule, Offsets, Settings, TimeName};
pub use crate::solver::{ITERATIONS, PrayTimes, SEED_TIMES};
pub use crate::time::CalendarDate;
pub use crate::types::{Coordinates, PrayerTimeSet, RawTimes, UtcOffset};

// Calculation modules
pub mod astro;
pub mod simple;
pub mod solver;

// Core modules
pub mod error;
pub mod format;
pub mod method;
pub mod settings;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
#[cfg(feature = "chrono")]
pub mod zone;
