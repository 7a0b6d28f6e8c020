//! Sky quality analysis engine
//!
//! This module provides the two side-by-side conversion pipelines deriving
//! standardized sky-darkness metrics: photo analysis over decoded pixel data
//! and radiance conversion over satellite samples, both classified through
//! the shared photometric scale.

pub mod common;
pub mod photo;
pub mod pixel;
pub mod radiance;
pub mod scale;

pub use common::{AnalysisError, InvalidInputError, Result};

pub use pixel::PixelBuffer;

pub use scale::PollutionLevel;

pub use photo::{AnalyzerConfig, AnalyzerConfigBuilder, PhotoAnalyzer, SkyMetrics};

pub use radiance::{
    Coordinates, LightPollutionEstimate, LightPollutionService, RadianceConverter,
    RadianceProvider, RadianceSample, RegionStatistics, DEFAULT_RADIANCE,
};
