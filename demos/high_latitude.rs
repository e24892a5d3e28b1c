//! High-latitude rules over a summer at 60°N.
//!
//! Around midsummer the sun never gets 18° below the horizon here, so Fajr and Isha only
//! exist through a high-latitude rule.

use praytimes::{Adjustment, HighLatitudeRule, Method, PrayTimes, TimeFormat, TimeName, format_time};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (latitude, longitude, tz) = (60.1699, 24.9384, 3.0); // Helsinki, summer time
    let rules = [
        HighLatitudeRule::None,
        HighLatitudeRule::NightMiddle,
        HighLatitudeRule::AngleBased,
        HighLatitudeRule::OneSeventh,
    ];

    print!("{:<8}", "Date");
    for rule in rules {
        print!(" {:>13}", format!("{rule:?}"));
    }
    println!();

    for (month, day) in [(5, 1), (5, 15), (6, 1), (6, 21), (7, 15), (8, 1), (8, 15)] {
        print!("{:<8}", format!("{month:02}-{day:02}"));
        for rule in rules {
            let mut solver = PrayTimes::new(Method::Mwl);
            solver.adjust(&Adjustment::new().high_latitude(rule))?;
            let raw = solver.raw_times([2024, month, day], [latitude, longitude], tz)?;

            let fajr = format_time(raw.get(TimeName::Fajr), TimeFormat::H24, None);
            let isha = format_time(raw.get(TimeName::Isha), TimeFormat::H24, None);
            print!(" {fajr:>6}/{isha:<6}");
        }
        println!();
    }

    Ok(())
}
