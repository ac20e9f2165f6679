//! Forest Fire Danger Index calculation pipeline
//!
//! Combines a locality's Soil Moisture Deficit (SMD) with recent rainfall
//! history and a daily forecast into a per-day drought factor, FFDI and
//! danger category. The whole pipeline is a pure function of its inputs:
//! the days-since-rain accumulator is threaded through the fold explicitly,
//! so identical inputs always produce identical output.

use crate::models::{DailyWeatherRecord, DangerCategory, FireDangerDay};

/// Added to denominators and log arguments to avoid division by zero and
/// ln(0); small enough not to move results at realistic magnitudes.
const EPSILON: f64 = 1e-5;

/// FFDI values are never reported below this floor.
const FFDI_FLOOR: f64 = 0.1;

/// Count the consecutive rain-free days ending at the most recent
/// observation.
///
/// Observations arrive in no guaranteed order, so they are sorted by date
/// descending first. The walk stops at the first day with measurable
/// precipitation; an empty window counts as 0.
pub fn days_since_last_rain(observations: &[DailyWeatherRecord]) -> u32 {
    let mut recent: Vec<&DailyWeatherRecord> = observations.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));

    let mut dry_days = 0;
    for day in recent {
        if day.precipitation_mm == 0.0 {
            dry_days += 1;
        } else {
            break;
        }
    }
    dry_days
}

/// Annotate each forecast day with its drought factor derived FFDI and
/// danger category.
///
/// Days must be in chronological order: each day's drought factor depends
/// on the running days-since-rain count established by the days before it.
/// The accumulator is seeded one below the observed dry spell because the
/// per-day update runs before the first day's calculation.
pub fn annotate_forecast(
    soil_moisture_deficit: f64,
    dry_spell_days: u32,
    forecast: &[DailyWeatherRecord],
) -> Vec<FireDangerDay> {
    let mut days_since_rain = i64::from(dry_spell_days) - 1;

    forecast
        .iter()
        .map(|day| {
            if day.precipitation_mm == 0.0 {
                days_since_rain += 1;
            } else {
                days_since_rain = 0;
            }

            let ffdi = fire_danger_index(days_since_rain, soil_moisture_deficit, day);
            let ffdi = ffdi.max(FFDI_FLOOR);

            FireDangerDay {
                weather: day.clone(),
                ffdi,
                category: DangerCategory::from_index(ffdi),
            }
        })
        .collect()
}

/// McArthur-style FFDI for one day, given the updated days-since-rain count.
fn fire_danger_index(days_since_rain: i64, smd: f64, day: &DailyWeatherRecord) -> f64 {
    let a = days_since_rain as f64;
    let r = day.precipitation_mm;
    let t = day.max_temperature_celsius;
    let rh = day.relative_humidity_percent;
    let v = day.wind_speed_kmh;

    // Drought factor from soil dryness and rain-adjusted dry days
    let x = a.powf(1.3) / (a.powf(1.3) + r - 2.0 + EPSILON);
    let f = (41.0 * x * x + x) / (40.0 * x * x + x + 1.0 + EPSILON);
    let drought_factor = 10.5 * (1.0 - (-(smd + 30.0) / 40.0).exp()) * f;

    1.2753
        * (0.987 * (drought_factor + EPSILON).ln() + 0.0338 * t - 0.0345 * rh + 0.0234 * v).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(date: &str, precip: f64, wind: f64, temp: f64, humidity: f64) -> DailyWeatherRecord {
        DailyWeatherRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            precipitation_mm: precip,
            wind_speed_kmh: wind,
            max_temperature_celsius: temp,
            relative_humidity_percent: humidity,
        }
    }

    #[test]
    fn test_dry_spell_empty_window() {
        assert_eq!(days_since_last_rain(&[]), 0);
    }

    #[test]
    fn test_dry_spell_counts_consecutive_dry_days() {
        // Four dry days since the last rain, counted across the whole
        // window rather than just the most recent day.
        let obs = vec![
            day("2024-01-06", 0.0, 10.0, 25.0, 50.0),
            day("2024-01-09", 0.0, 10.0, 25.0, 50.0),
            day("2024-01-08", 0.0, 10.0, 25.0, 50.0),
            day("2024-01-07", 0.0, 10.0, 25.0, 50.0),
            day("2024-01-05", 3.2, 10.0, 25.0, 50.0),
            day("2024-01-04", 0.0, 10.0, 25.0, 50.0),
        ];
        assert_eq!(days_since_last_rain(&obs), 4);
    }

    #[test]
    fn test_dry_spell_rain_on_most_recent_day() {
        let obs = vec![
            day("2024-01-02", 0.0, 10.0, 25.0, 50.0),
            day("2024-01-03", 1.0, 10.0, 25.0, 50.0),
        ];
        assert_eq!(days_since_last_rain(&obs), 0);
    }

    #[test]
    fn test_dry_spell_all_days_dry() {
        let obs = vec![
            day("2024-01-01", 0.0, 10.0, 25.0, 50.0),
            day("2024-01-02", 0.0, 10.0, 25.0, 50.0),
            day("2024-01-03", 0.0, 10.0, 25.0, 50.0),
        ];
        assert_eq!(days_since_last_rain(&obs), 3);
    }

    #[test]
    fn test_engine_matches_reference_value() {
        // SMD 50, five-day dry spell seeding the accumulator at 4, one dry
        // hot day: the accumulator reaches 5 before the drought factor is
        // computed and the formula chain gives FFDI ~19.86.
        let forecast = vec![day("2024-01-10", 0.0, 10.0, 30.0, 20.0)];
        let result = annotate_forecast(50.0, 5, &forecast);

        assert_eq!(result.len(), 1);
        assert!((result[0].ffdi - 19.86081723153572).abs() < 1e-6);
        assert_eq!(result[0].category, DangerCategory::High);
    }

    #[test]
    fn test_engine_rainy_day_resets_and_clamps() {
        // Rain zeroes the accumulator and collapses the drought factor; the
        // raw index lands far below the floor and is reported as exactly 0.1.
        let forecast = vec![day("2024-01-10", 6.0, 15.0, 22.0, 65.0)];
        let result = annotate_forecast(50.0, 3, &forecast);

        assert_eq!(result[0].ffdi, 0.1);
        assert_eq!(result[0].category, DangerCategory::LowModerate);
    }

    #[test]
    fn test_engine_threads_accumulator_across_days() {
        // Dry day then rainy day: the first uses the carried count, the
        // second resets it.
        let forecast = vec![
            day("2024-01-10", 0.0, 24.0, 33.0, 18.0),
            day("2024-01-11", 1.5, 12.0, 25.0, 55.0),
        ];
        let result = annotate_forecast(40.0, 3, &forecast);

        assert!((result[0].ffdi - 31.47108620319266).abs() < 1e-6);
        assert_eq!(result[0].category, DangerCategory::VeryHigh);
        assert_eq!(result[1].ffdi, 0.1);
    }

    #[test]
    fn test_engine_zero_dry_spell_seed() {
        // A fresh rain history seeds the accumulator at -1; the first dry
        // forecast day brings it to 0 and must not panic or go negative.
        let forecast = vec![day("2024-01-10", 0.0, 10.0, 28.0, 40.0)];
        let result = annotate_forecast(50.0, 0, &forecast);

        assert_eq!(result.len(), 1);
        assert!(result[0].ffdi >= 0.1);
    }

    #[test]
    fn test_engine_deterministic() {
        let forecast = vec![
            day("2024-01-10", 0.0, 24.0, 33.0, 18.0),
            day("2024-01-11", 1.5, 12.0, 25.0, 55.0),
            day("2024-01-12", 0.0, 30.0, 38.0, 12.0),
        ];
        let first = annotate_forecast(45.0, 2, &forecast);
        let second = annotate_forecast(45.0, 2, &forecast);
        assert_eq!(first, second);
    }
}
