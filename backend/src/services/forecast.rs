//! Fire danger forecast assembly
//!
//! Orchestrates the soil moisture lookup, the weather fetches and the FFDI
//! engine into a single annotated forecast. Any failure aborts the whole
//! computation; no partial forecast is ever returned.

use std::sync::Arc;

use shared::{annotate_forecast, days_since_last_rain, FireDangerForecast};

use crate::error::AppResult;
use crate::external::weather::WeatherClient;
use crate::services::soil_moisture::SoilMoistureStore;

/// Fire danger forecast service
#[derive(Clone)]
pub struct ForecastService {
    soil_moisture: Arc<SoilMoistureStore>,
    weather: WeatherClient,
}

impl ForecastService {
    /// Create a new ForecastService
    pub fn new(soil_moisture: Arc<SoilMoistureStore>, weather: WeatherClient) -> Self {
        Self {
            soil_moisture,
            weather,
        }
    }

    /// Compute the annotated fire danger forecast for a locality.
    ///
    /// Resolves the soil moisture deficit, fetches recent observations and
    /// the upcoming forecast, derives the dry spell ending at the most
    /// recent observation and runs the FFDI engine over the forecast days
    /// in chronological order.
    pub async fn fire_danger_forecast(
        &self,
        locality: &str,
        api_key: &str,
    ) -> AppResult<FireDangerForecast> {
        let locality = locality.to_lowercase();
        tracing::info!("Calculating fire danger rating for {:?}", locality);

        let smd = self.soil_moisture.lookup(&locality)?;

        let observations = self.weather.get_observations(&locality, api_key).await?;
        let dry_spell = days_since_last_rain(&observations);

        let forecast = self.weather.get_forecast(&locality, api_key).await?;
        let days = annotate_forecast(smd, dry_spell, &forecast);

        tracing::info!(
            "Calculated fire danger for {:?}: {} forecast days, {} day dry spell",
            locality,
            days.len(),
            dry_spell
        );

        Ok(FireDangerForecast { locality, days })
    }
}
