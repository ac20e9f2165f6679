//! Fire Danger Forecast Service - Backend Server
//!
//! Estimates per-day wildfire danger for a named locality by combining a
//! soil moisture baseline, recent rainfall history and a multi-day weather
//! forecast into a Forest Fire Danger Index and danger category.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use external::weather::WeatherClient;
use services::soil_moisture::SoilMoistureStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub soil_moisture: Arc<SoilMoistureStore>,
    pub weather: WeatherClient,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ffdi_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Fire Danger Forecast Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the soil moisture dataset
    let soil_moisture = SoilMoistureStore::load(&config.soil_moisture.dataset_path)?;

    let weather = WeatherClient::new(config.weather.base_url.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        soil_moisture: Arc::new(soil_moisture),
        weather,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Fire Danger Forecast Service API v1.0"
}
