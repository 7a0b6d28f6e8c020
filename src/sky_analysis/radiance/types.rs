//! Radiance sample and estimate types

use serde::{Deserialize, Serialize};

use crate::sky_analysis::scale::PollutionLevel;

/// Geographic query position, passed through to the estimate unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One satellite nighttime-radiance measurement, nW/cm²/sr.
///
/// `data_year` and `source` are provenance tags carried through to the
/// estimate unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadianceSample {
    pub radiance: f64,
    pub data_year: Option<i32>,
    pub source: Option<String>,
}

impl RadianceSample {
    pub fn new(radiance: f64) -> Self {
        Self {
            radiance,
            data_year: None,
            source: None,
        }
    }
}

/// Sky-darkness estimate derived from a radiance sample.
///
/// Immutable once produced; the caller persists or discards it. Unlike the
/// photo path, the SQM value here is not clamped — only NELM and the level
/// thresholds bound it downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightPollutionEstimate {
    /// Query position, when the estimate was made for one
    pub coordinates: Option<Coordinates>,
    /// Input radiance, nW/cm²/sr
    pub radiance: f64,
    /// Sky Quality Meter estimate
    pub sqm: f64,
    /// Bortle class, 1-9
    pub bortle_scale: u8,
    /// Naked-eye limiting magnitude, clamped to [3.0, 7.5]
    pub nelm: f64,
    pub light_pollution_level: PollutionLevel,
    /// Provenance passthrough from the sample
    pub source: Option<String>,
    pub data_year: Option<i32>,
}

/// Aggregate over a set of radiance samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStatistics {
    pub avg_radiance: f64,
    pub avg_sqm: f64,
    pub avg_bortle: u8,
    pub count: usize,
}
