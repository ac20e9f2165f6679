//! Domain models for the Fire Danger Forecast Service

pub mod danger;
pub mod weather;

pub use danger::*;
pub use weather::*;
