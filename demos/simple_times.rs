//! Approximate times from coordinates alone, compared with the full solver.

use praytimes::simple::prayer_times;
use praytimes::{Method, PrayTimes, TimeFormat, UtcOffset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (latitude, longitude, tz) = (33.5138, 36.2765, 3.0); // Damascus
    let date = [2024, 10, 5];

    let simple = prayer_times(date, latitude, longitude, tz)?;
    let full = PrayTimes::new(Method::Mwl).get_times(
        date,
        [latitude, longitude],
        UtcOffset::Hours(tz),
        UtcOffset::Hours(0.0),
        Some(TimeFormat::H24),
    )?;

    println!("{:<8} {:>7} {:>7}", "", "simple", "full");
    println!("{:<8} {:>7} {:>7}", "Fajr", simple.fajr, full.fajr());
    println!("{:<8} {:>7} {:>7}", "Sunrise", simple.sunrise, full.sunrise());
    println!("{:<8} {:>7} {:>7}", "Dhuhr", simple.dhuhr, full.dhuhr());
    println!("{:<8} {:>7} {:>7}", "Asr", simple.asr, full.asr());
    println!("{:<8} {:>7} {:>7}", "Maghrib", simple.maghrib, full.maghrib());
    println!("{:<8} {:>7} {:>7}", "Isha", simple.isha, full.isha());

    Ok(())
}
