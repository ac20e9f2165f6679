//! Shared types and domain logic for the Fire Danger Forecast Service
//!
//! This crate contains the weather record types and the FFDI calculation
//! pipeline, kept free of I/O so the backend and any other consumers can
//! exercise the same code.

pub mod ffdi;
pub mod models;

pub use ffdi::*;
pub use models::*;
