//! Photometric classification types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative light pollution level.
///
/// Closed vocabulary shared by both conversion pipelines; every consumption
/// site matches it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PollutionLevel {
    Excellent,
    Good,
    Moderate,
    Poor,
    VeryPoor,
}

impl PollutionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PollutionLevel::Excellent => "EXCELLENT",
            PollutionLevel::Good => "GOOD",
            PollutionLevel::Moderate => "MODERATE",
            PollutionLevel::Poor => "POOR",
            PollutionLevel::VeryPoor => "VERY_POOR",
        }
    }
}

impl fmt::Display for PollutionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
