//! Fire danger categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six FFDI danger bands used on Australian fire danger signage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum DangerCategory {
    #[serde(rename = "low-moderate")]
    LowModerate,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very high")]
    VeryHigh,
    #[serde(rename = "severe")]
    Severe,
    #[serde(rename = "extreme")]
    Extreme,
    #[serde(rename = "catastrophic (code red)")]
    Catastrophic,
}

impl DangerCategory {
    /// Classify an FFDI value into its danger band.
    ///
    /// Bands are contiguous with inclusive upper edges: (11, 24] is high,
    /// (24, 49] very high, and so on. Values below zero land in the first
    /// band, although the engine's 0.1 floor makes that unreachable in
    /// practice.
    pub fn from_index(ffdi: f64) -> Self {
        if ffdi <= 11.0 {
            DangerCategory::LowModerate
        } else if ffdi <= 24.0 {
            DangerCategory::High
        } else if ffdi <= 49.0 {
            DangerCategory::VeryHigh
        } else if ffdi <= 99.0 {
            DangerCategory::Severe
        } else if ffdi <= 149.0 {
            DangerCategory::Extreme
        } else {
            DangerCategory::Catastrophic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DangerCategory::LowModerate => "low-moderate",
            DangerCategory::High => "high",
            DangerCategory::VeryHigh => "very high",
            DangerCategory::Severe => "severe",
            DangerCategory::Extreme => "extreme",
            DangerCategory::Catastrophic => "catastrophic (code red)",
        }
    }
}

impl fmt::Display for DangerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
