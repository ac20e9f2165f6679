//! Weather data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::danger::DangerCategory;

/// A single day of weather, observed or forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeatherRecord {
    pub date: NaiveDate,
    /// Precipitation in millimetres; absent upstream values are normalized to 0
    pub precipitation_mm: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Maximum temperature in °C
    pub max_temperature_celsius: f64,
    /// Relative humidity in %
    pub relative_humidity_percent: f64,
}

/// A forecast day annotated with its fire danger rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireDangerDay {
    #[serde(flatten)]
    pub weather: DailyWeatherRecord,
    /// Forest Fire Danger Index, never reported below 0.1
    #[serde(rename = "FFDI")]
    pub ffdi: f64,
    #[serde(rename = "FFDI_category")]
    pub category: DangerCategory,
}

/// Fire danger forecast for a locality
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireDangerForecast {
    pub locality: String,
    pub days: Vec<FireDangerDay>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::danger::DangerCategory;
    use chrono::NaiveDate;

    #[test]
    fn test_fire_danger_day_serializes_flat_with_index_fields() {
        let day = FireDangerDay {
            weather: DailyWeatherRecord {
                date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
                precipitation_mm: 0.0,
                wind_speed_kmh: 10.0,
                max_temperature_celsius: 30.0,
                relative_humidity_percent: 20.0,
            },
            ffdi: 19.9,
            category: DangerCategory::High,
        };

        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["date"], "2024-01-10");
        assert_eq!(json["FFDI"], 19.9);
        assert_eq!(json["FFDI_category"], "high");
        assert_eq!(json["max_temperature_celsius"], 30.0);
    }
}
