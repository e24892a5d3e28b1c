//! Standard offset and daylight saving detection against real IANA time zones.

#![cfg(feature = "chrono")]

use chrono::NaiveDate;
use chrono_tz::{America, Asia, Australia, Europe, Tz};
use praytimes::zone::{dst_offset, standard_offset, utc_offset_hours};
use praytimes::{CalendarDate, Error, Method, PrayTimes, TimeFormat, TimeName, UtcOffset};

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

#[test]
fn northern_hemisphere_dst() {
    let zone: Tz = America::New_York;
    assert_eq!(standard_offset(&zone, 2024), Ok(-5.0));
    assert_eq!(dst_offset(&zone, date(2024, 1, 15)), Ok(0.0));
    assert_eq!(dst_offset(&zone, date(2024, 7, 4)), Ok(1.0));
    assert_eq!(utc_offset_hours(&zone, date(2024, 7, 4)), Ok(-4.0));

    let london: Tz = Europe::London;
    assert_eq!(standard_offset(&london, 2024), Ok(0.0));
    assert_eq!(dst_offset(&london, date(2024, 6, 21)), Ok(1.0));
}

#[test]
fn southern_hemisphere_dst() {
    let zone: Tz = Australia::Sydney;
    assert_eq!(standard_offset(&zone, 2024), Ok(10.0));
    assert_eq!(dst_offset(&zone, date(2024, 1, 15)), Ok(1.0));
    assert_eq!(dst_offset(&zone, date(2024, 6, 21)), Ok(0.0));
}

#[test]
fn half_hour_dst_shift() {
    // Lord Howe Island: UTC+10:30 standard, UTC+11 in the southern summer
    let zone: Tz = Australia::Lord_Howe;
    assert_eq!(standard_offset(&zone, 2024), Ok(10.5));
    assert_eq!(dst_offset(&zone, date(2024, 1, 15)), Ok(0.5));
    assert_eq!(dst_offset(&zone, date(2024, 6, 15)), Ok(0.0));

    let solver = PrayTimes::new(Method::Mwl);
    let coords = [-31.5553, 159.0821];
    let in_zone = solver
        .get_times_in_zone(date(2024, 1, 15), coords, &zone, Some(TimeFormat::Float))
        .unwrap();
    let explicit = solver
        .raw_times(date(2024, 1, 15), coords, 11.0)
        .unwrap();

    for (name, time) in in_zone.iter() {
        assert_eq!(time.hours(), explicit.get(name), "{name}");
    }
    let dhuhr = in_zone.get(TimeName::Dhuhr).hours().unwrap();
    assert!((dhuhr - 12.55).abs() < 0.1, "Dhuhr {dhuhr}");
}

#[test]
fn dates_beyond_chrono_range_are_rejected() {
    let solver = PrayTimes::new(Method::Mwl);
    let result = solver.get_times_in_zone(
        date(300_000, 1, 1),
        [51.5, 0.0],
        &Europe::London,
        None,
    );
    assert!(matches!(result, Err(Error::InvalidDate { .. })));
}

#[test]
fn fractional_zones_without_dst() {
    let kolkata: Tz = Asia::Kolkata;
    assert_eq!(standard_offset(&kolkata, 2024), Ok(5.5));
    assert_eq!(dst_offset(&kolkata, date(2024, 7, 1)), Ok(0.0));

    let kathmandu: Tz = Asia::Kathmandu;
    assert_eq!(standard_offset(&kathmandu, 2024), Ok(5.75));
}

#[test]
fn transition_day_uses_midday_offset() {
    // US clocks move forward at 02:00 on 2024-03-10; midday is already on DST
    let zone: Tz = America::New_York;
    assert_eq!(utc_offset_hours(&zone, date(2024, 3, 10)), Ok(-4.0));
    assert_eq!(dst_offset(&zone, date(2024, 3, 9)), Ok(0.0));
    assert_eq!(dst_offset(&zone, date(2024, 3, 10)), Ok(1.0));
}

#[test]
fn times_in_zone_match_explicit_offsets() {
    let solver = PrayTimes::new(Method::Isna);
    let day = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
    let coords = [40.7128, -74.006];

    let in_zone = solver
        .get_times_in_zone(day, coords, &America::New_York, Some(TimeFormat::Float))
        .unwrap();
    let explicit = solver
        .get_times(
            day,
            coords,
            UtcOffset::Hours(-5.0),
            UtcOffset::Hours(1.0),
            Some(TimeFormat::Float),
        )
        .unwrap();

    assert_eq!(in_zone, explicit);
}

#[test]
fn chrono_dates_are_accepted() {
    let solver = PrayTimes::new(Method::Mwl);
    let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let from_chrono = solver.raw_times(day, [48.2, 16.37], 1.0).unwrap();
    let from_array = solver.raw_times([2024, 2, 29], [48.2, 16.37], 1.0).unwrap();
    assert_eq!(from_chrono, from_array);
}
