//! Prints today's prayer times for a handful of cities.
//!
//! ```sh
//! cargo run --example daily_times
//! ```

use anyhow::Result;
use chrono::Local;
use waqt::prelude::*;

struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    timezone: f64,
    method: CalculationMethod,
}

fn main() -> Result<()> {
    let cities = [
        City { name: "Makkah", latitude: 21.4225, longitude: 39.8262, elevation: 277.0, timezone: 3.0, method: CalculationMethod::Makkah },
        City { name: "Cairo", latitude: 30.0444, longitude: 31.2357, elevation: 23.0, timezone: 2.0, method: CalculationMethod::Egypt },
        City { name: "Karachi", latitude: 24.8607, longitude: 67.0011, elevation: 8.0, timezone: 5.0, method: CalculationMethod::Karachi },
        City { name: "London", latitude: 51.5074, longitude: -0.1278, elevation: 11.0, timezone: 0.0, method: CalculationMethod::Mwl },
        City { name: "New York", latitude: 40.7128, longitude: -74.0060, elevation: 10.0, timezone: -5.0, method: CalculationMethod::Isna },
        City { name: "Tehran", latitude: 35.6892, longitude: 51.3890, elevation: 1189.0, timezone: 3.5, method: CalculationMethod::Tehran },
    ];

    let today = Local::now().date_naive();
    println!("Prayer times for {}\n", today.format("%A, %d %B %Y"));
    println!(
        "{:<10} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "CITY", "FAJR", "SUNRISE", "DHUHR", "ASR", "MAGHRIB", "ISHA", "MIDNIGHT"
    );

    for city in &cities {
        let location = GeoCoordinate::new(city.latitude, city.longitude)
            .with_elevation(city.elevation);
        let settings = Settings::new(city.method);
        let times = compute(today, &location, city.timezone, &settings);

        let cell = |slot: TimeSlot| match times.clock(slot) {
            Some(clock) => format!("{:02}:{:02}", clock.hour, clock.minute),
            None => "--:--".to_string(),
        };

        println!(
            "{:<10} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
            city.name,
            cell(TimeSlot::Fajr),
            cell(TimeSlot::Sunrise),
            cell(TimeSlot::Dhuhr),
            cell(TimeSlot::Asr),
            cell(TimeSlot::Maghrib),
            cell(TimeSlot::Isha),
            cell(TimeSlot::Midnight),
        );
    }

    Ok(())
}
