//! Soil moisture deficit lookup
//!
//! Loads the per-locality Soil Moisture Deficit dataset once at startup.
//! Localities are keyed lowercase; lookups normalize case the same way.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// In-memory soil moisture deficit dataset
#[derive(Debug, Clone)]
pub struct SoilMoistureStore {
    deficits: HashMap<String, f64>,
}

impl SoilMoistureStore {
    /// Load the dataset from a JSON file mapping locality to SMD
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!(
                "failed to read soil moisture dataset {}: {}",
                path.display(),
                e
            ))
        })?;

        let deficits: HashMap<String, f64> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Configuration(format!(
                "failed to parse soil moisture dataset {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!("Loaded soil moisture deficits for {} localities", deficits.len());

        Ok(Self { deficits })
    }

    /// Build a store directly from locality/deficit pairs
    pub fn from_deficits(deficits: HashMap<String, f64>) -> Self {
        Self { deficits }
    }

    /// Look up the soil moisture deficit for a locality, case-insensitively
    pub fn lookup(&self, locality: &str) -> AppResult<f64> {
        let key = locality.to_lowercase();
        self.deficits
            .get(&key)
            .copied()
            .ok_or_else(|| AppError::LocalityNotFound(key))
    }

    /// Number of localities in the dataset
    pub fn len(&self) -> usize {
        self.deficits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deficits.is_empty()
    }
}
