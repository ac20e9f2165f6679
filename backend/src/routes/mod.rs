//! Route definitions for the Fire Danger Forecast Service

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Fire danger forecast (public)
        .route("/forecast", get(handlers::get_fire_danger_forecast))
}
