//! Photo analysis configuration and output types

use serde::{Deserialize, Serialize};

use crate::sky_analysis::scale::PollutionLevel;

/// Metrics derived from one night-sky photograph.
///
/// Computed once per analysis call and immutable thereafter; the caller
/// persists or discards the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyMetrics {
    /// Whole-image luminance mean, 0-255
    pub average_brightness: f64,
    /// Luminance mean restricted to the sky-region rows, 0-255
    pub sky_region_brightness: f64,
    /// Star-like bright components detected in the frame
    pub star_count: u32,
    /// Elevated brightness near the lower edge of the frame
    pub horizon_glow_detected: bool,
    /// Estimated color temperature in Kelvin, clamped to [2000, 10000]
    pub color_temperature: u32,
    /// Sky Quality Meter estimate, clamped to [10, 22]
    pub sqm_value: f64,
    /// Bortle class, 1 (pristine) to 9 (inner city)
    pub bortle_scale: u8,
    /// Qualitative pollution level from SQM, star count and glow
    pub light_pollution_level: PollutionLevel,
}

/// Configuration for photo analysis
///
/// Every photo-path threshold lives here as plain data; the defaults are the
/// calibrated production values.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Stretched-grayscale value a pixel must exceed to be star material
    pub star_threshold: u8,
    /// Smallest component size (pixels) counted as a star; smaller is noise
    pub min_star_size: usize,
    /// Largest component size counted as a star; larger is cloud, moon or
    /// an overexposed region
    pub max_star_size: usize,
    /// Fraction of rows, from the top, treated as sky for the SQM reading
    pub sky_row_fraction: f64,
    /// Fraction of rows, from the bottom, sampled for horizon glow
    pub horizon_row_fraction: f64,
    /// Fraction of rows, from the top, used as the glow reference window
    pub glow_reference_fraction: f64,
    /// Horizon-to-reference brightness ratio above which glow is flagged
    pub glow_ratio: f64,
    /// Whether to reject zero-sized dimensions and short channel counts.
    /// Buffer length consistency is always enforced.
    pub validate_dimensions: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            star_threshold: 200,
            min_star_size: 2,
            max_star_size: 50,
            sky_row_fraction: 0.7,
            horizon_row_fraction: 0.2,
            glow_reference_fraction: 0.5,
            glow_ratio: 1.3,
            validate_dimensions: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }
}

/// Builder for AnalyzerConfig
#[derive(Default)]
pub struct AnalyzerConfigBuilder {
    star_threshold: Option<u8>,
    min_star_size: Option<usize>,
    max_star_size: Option<usize>,
    sky_row_fraction: Option<f64>,
    horizon_row_fraction: Option<f64>,
    glow_reference_fraction: Option<f64>,
    glow_ratio: Option<f64>,
    validate_dimensions: Option<bool>,
}

impl AnalyzerConfigBuilder {
    pub fn star_threshold(mut self, threshold: u8) -> Self {
        self.star_threshold = Some(threshold);
        self
    }

    pub fn star_size_range(mut self, min: usize, max: usize) -> Self {
        self.min_star_size = Some(min);
        self.max_star_size = Some(max);
        self
    }

    pub fn sky_row_fraction(mut self, fraction: f64) -> Self {
        self.sky_row_fraction = Some(fraction);
        self
    }

    pub fn horizon_row_fraction(mut self, fraction: f64) -> Self {
        self.horizon_row_fraction = Some(fraction);
        self
    }

    pub fn glow_reference_fraction(mut self, fraction: f64) -> Self {
        self.glow_reference_fraction = Some(fraction);
        self
    }

    pub fn glow_ratio(mut self, ratio: f64) -> Self {
        self.glow_ratio = Some(ratio);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> AnalyzerConfig {
        let default = AnalyzerConfig::default();
        AnalyzerConfig {
            star_threshold: self.star_threshold.unwrap_or(default.star_threshold),
            min_star_size: self.min_star_size.unwrap_or(default.min_star_size),
            max_star_size: self.max_star_size.unwrap_or(default.max_star_size),
            sky_row_fraction: self.sky_row_fraction.unwrap_or(default.sky_row_fraction),
            horizon_row_fraction: self
                .horizon_row_fraction
                .unwrap_or(default.horizon_row_fraction),
            glow_reference_fraction: self
                .glow_reference_fraction
                .unwrap_or(default.glow_reference_fraction),
            glow_ratio: self.glow_ratio.unwrap_or(default.glow_ratio),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
        }
    }
}
