//! Basic prayer time calculation example.

use chrono::NaiveDate;
use chrono_tz::Europe::London;
use praytimes::{Method, PrayTimes, TimeFormat, UtcOffset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let latitude = 51.5074; // London
    let longitude = -0.1278;
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).ok_or("invalid date")?;

    // Example 1: explicit offsets (GMT plus one hour of summer time)
    let solver = PrayTimes::new(Method::Mwl);
    let times = solver.get_times(
        date,
        [latitude, longitude],
        UtcOffset::Hours(0.0),
        UtcOffset::Hours(1.0),
        Some(TimeFormat::H24),
    )?;

    println!("Prayer times for London on {date} ({}):", Method::Mwl.name());
    for (name, time) in times.iter() {
        println!("  {name:>8}: {time}");
    }

    // Example 2: the same day resolved from the IANA zone, 12-hour clock
    let zoned = solver.get_times_in_zone(date, [latitude, longitude], &London, None)?;
    println!("\nFrom the Europe/London zone:");
    println!("  Fajr {}  Dhuhr {}  Maghrib {}", zoned.fajr(), zoned.dhuhr(), zoned.maghrib());

    // Example 3: every built-in method side by side
    println!("\n{:<8} {:>6} {:>6}", "Method", "Fajr", "Isha");
    for method in Method::ALL {
        let times = PrayTimes::new(method).get_times(
            date,
            [latitude, longitude],
            UtcOffset::Hours(0.0),
            UtcOffset::Hours(1.0),
            Some(TimeFormat::H24),
        )?;
        println!("{:<8} {:>6} {:>6}", method.code(), times.fajr(), times.isha());
    }

    Ok(())
}
