//! HTTP handlers for fire danger forecast endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared::FireDangerForecast;

use crate::error::{AppError, AppResult};
use crate::services::forecast::ForecastService;
use crate::AppState;

/// Query parameters for a forecast request
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub locality: Option<String>,
    pub key: Option<String>,
}

/// Get the fire danger forecast for a locality
pub async fn get_fire_danger_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<FireDangerForecast>> {
    let locality = query.locality.filter(|l| !l.trim().is_empty()).ok_or_else(|| {
        AppError::Validation("No locality found in request query parameters".to_string())
    })?;

    // A per-request key takes precedence over the configured default
    let api_key = query
        .key
        .or_else(|| state.config.weather.api_key.clone())
        .ok_or_else(|| {
            AppError::Validation(
                "No weather API key in request query parameters and no default configured"
                    .to_string(),
            )
        })?;

    let service = ForecastService::new(state.soil_moisture.clone(), state.weather.clone());
    let forecast = service.fire_danger_forecast(&locality, &api_key).await?;
    Ok(Json(forecast))
}
