//! Property tests for range fixing, formatting and solver robustness.

use praytimes::{
    Coordinates, FormattedTime, Method, PrayTimes, TimeFormat, TimeName, fix_angle, fix_hour,
    format_time,
};
use proptest::prelude::*;

fn finite() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |value| value.is_finite())
}

proptest! {
    #[test]
    fn prop_fix_angle_range(angle in finite()) {
        let fixed = fix_angle(angle);
        prop_assert!(fixed >= 0.0);
        prop_assert!(fixed < 360.0);
    }

    #[test]
    fn prop_fix_hour_range(hours in finite()) {
        let fixed = fix_hour(hours);
        prop_assert!(fixed >= 0.0);
        prop_assert!(fixed < 24.0);
    }

    #[test]
    fn prop_fix_hour_idempotent(hours in finite()) {
        let once = fix_hour(hours);
        prop_assert_eq!(fix_hour(once), once);
    }

    #[test]
    fn prop_fix_hour_preserves_time_of_day(hours in -1e4..1e4f64) {
        let days = (fix_hour(hours) - hours) / 24.0;
        prop_assert!((days - days.round()).abs() < 1e-9);
    }

    #[test]
    fn prop_clock_format_is_well_formed(hours in finite()) {
        let FormattedTime::Clock(text) = format_time(Some(hours), TimeFormat::H24, None) else {
            panic!("finite time formatted as invalid");
        };
        let (h, m) = text.split_once(':').unwrap();
        prop_assert_eq!(h.len(), 2);
        prop_assert!(h.parse::<u32>().unwrap() < 24);
        prop_assert!(m.parse::<u32>().unwrap() < 60);
    }

    #[test]
    fn prop_solver_never_fails_on_valid_input(
        latitude in -90.0..=90.0f64,
        longitude in -180.0..=180.0f64,
        elevation in -100.0..5000.0f64,
        year in 1900..2100i32,
        month in 1..=12u32,
        day in 1..=28u32,
        method in 0..Method::ALL.len(),
    ) {
        let coords = Coordinates::new(latitude, longitude, elevation).unwrap();
        let tz = (longitude / 15.0).round();
        let solver = PrayTimes::new(Method::ALL[method]);

        let raw = solver.raw_times((year, month, day), coords, tz).unwrap();
        for (name, time) in raw.iter() {
            if let Some(time) = time {
                prop_assert!(time.is_finite(), "{} is {}", name, time);
            }
        }
        // Solar noon always exists
        prop_assert!(raw.get(TimeName::Dhuhr).is_some());
    }
}
