//! Example demonstrating usage without chrono or a local time zone.
//!
//! Everything here works with `default-features = false, features = ["libm"]`: dates are
//! plain numbers and the UTC offset is passed explicitly.

use praytimes::astro::sun_position;
use praytimes::{Adjustment, AsrFactor, CalendarDate, Method, PrayTimes, Rule, Settings, TimeName};

fn main() {
    let date = CalendarDate::new(2024, 1, 15).expect("Valid date");
    let jd = date.julian_date();
    let sun = sun_position(jd);

    println!("Julian Date: {:.1}", jd.julian_date());
    println!("Declination: {:.3}°", sun.declination);
    println!("Equation of time: {:.2} min\n", sun.equation_of_time * 60.0);

    // Custom settings not tied to a named method
    let mut settings = Settings::from_method(Method::Karachi);
    settings
        .adjust(
            &Adjustment::new()
                .asr(AsrFactor::Hanafi)
                .isha(Rule::Minutes(75.0)),
        )
        .expect("Valid adjustment");
    let solver = PrayTimes::from_settings(settings);

    let raw = solver
        .raw_times(date, [24.8607, 67.0011], 5.0)
        .expect("Valid coordinates");

    for (name, hours) in raw.iter() {
        match hours {
            Some(hours) => println!("{name:>8}: {hours:.4} h"),
            None => println!("{name:>8}: does not occur"),
        }
    }

    let night = raw.get(TimeName::Fajr).zip(raw.get(TimeName::Isha));
    if let Some((fajr, isha)) = night {
        println!("\nIsha to Fajr: {:.2} h", fajr + 24.0 - isha);
    }
}
