//! Business logic services

pub mod forecast;
pub mod soil_moisture;
