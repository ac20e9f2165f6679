//! Weather API client for fetching observed and forecast daily weather
//!
//! Integrates with the Visual Crossing timeline API for recent observations
//! and the upcoming multi-day forecast

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use shared::DailyWeatherRecord;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

/// Visual Crossing timeline API response
#[derive(Debug, Deserialize)]
struct TimelineResponse {
    days: Vec<TimelineDay>,
}

/// One day in a timeline response. Only `precip` may be absent or null;
/// the other numerics are mandatory and validated during conversion.
#[derive(Debug, Deserialize)]
struct TimelineDay {
    datetime: NaiveDate,
    precip: Option<f64>,
    windspeed: Option<f64>,
    tempmax: Option<f64>,
    humidity: Option<f64>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the last ~15 days of observed daily weather for a locality
    pub async fn get_observations(
        &self,
        locality: &str,
        api_key: &str,
    ) -> AppResult<Vec<DailyWeatherRecord>> {
        let url = self.observations_url(locality);
        let days = self.fetch_timeline(&url, locality, api_key, "obs").await?;
        convert_days(days)
    }

    /// Fetch the upcoming multi-day forecast for a locality
    pub async fn get_forecast(
        &self,
        locality: &str,
        api_key: &str,
    ) -> AppResult<Vec<DailyWeatherRecord>> {
        let url = self.forecast_url(locality);
        let days = self.fetch_timeline(&url, locality, api_key, "fcst").await?;
        convert_days(days)
    }

    fn observations_url(&self, locality: &str) -> String {
        format!(
            "{}/{},VIC/last15days",
            self.base_url,
            urlencoding::encode(locality)
        )
    }

    // The forecast path spells the state suffix with a space; the raw space
    // is percent-encoded when the URL is parsed.
    fn forecast_url(&self, locality: &str) -> String {
        format!("{}/{}, VIC/", self.base_url, urlencoding::encode(locality))
    }

    async fn fetch_timeline(
        &self,
        url: &str,
        locality: &str,
        api_key: &str,
        include: &str,
    ) -> AppResult<Vec<TimelineDay>> {
        let response = self
            .client
            .get(url)
            .query(&[("key", api_key), ("include", include), ("unitGroup", "metric")])
            .send()
            .await
            .map_err(|e| AppError::Upstream {
                locality: locality.to_string(),
                body: format!("request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Unsuccessful weather API request for {:?}", locality);
            return Err(AppError::Upstream {
                locality: locality.to_string(),
                body,
            });
        }

        let data: TimelineResponse = response.json().await.map_err(|e| AppError::Upstream {
            locality: locality.to_string(),
            body: format!("failed to parse timeline response: {}", e),
        })?;

        Ok(data.days)
    }
}

/// Convert timeline days into weather records, enforcing mandatory fields.
///
/// Absent precipitation is normalized to 0; a missing wind speed,
/// temperature or humidity aborts the whole computation rather than being
/// silently defaulted.
fn convert_days(days: Vec<TimelineDay>) -> AppResult<Vec<DailyWeatherRecord>> {
    days.into_iter()
        .map(|day| {
            let date = day.datetime;
            let require = |field: &str, value: Option<f64>| {
                value.ok_or_else(|| {
                    AppError::Validation(format!(
                        "Day record {} is missing mandatory field {}",
                        date, field
                    ))
                })
            };

            Ok(DailyWeatherRecord {
                date,
                precipitation_mm: day.precip.unwrap_or(0.0),
                wind_speed_kmh: require("windspeed", day.windspeed)?,
                max_temperature_celsius: require("tempmax", day.tempmax)?,
                relative_humidity_percent: require("humidity", day.humidity)?,
            })
        })
        .collect()
}
