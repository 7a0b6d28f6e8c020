use tracing::{debug, instrument};

use crate::sky_analysis::{
    common::error::InvalidInputError,
    radiance::converter::RadianceConverter,
    radiance::provider::{RadianceProvider, UncoveredProvider, DEFAULT_RADIANCE, DEFAULT_SOURCE},
    radiance::types::{Coordinates, LightPollutionEstimate, RadianceSample, RegionStatistics},
};

/// Location-keyed light pollution estimation.
///
/// Orchestrates the radiance lookup and the conversion chain: asks the
/// provider for the nearest sample, falls back to the documented default
/// radiance when the location is uncovered, and threads coordinates and
/// provenance into the estimate.
pub struct LightPollutionService<P: RadianceProvider> {
    provider: P,
    converter: RadianceConverter,
}

impl LightPollutionService<UncoveredProvider> {
    pub fn new() -> Self {
        Self {
            provider: UncoveredProvider,
            converter: RadianceConverter::new(),
        }
    }
}

impl Default for LightPollutionService<UncoveredProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: RadianceProvider> LightPollutionService<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            converter: RadianceConverter::new(),
        }
    }

    #[instrument(skip(self), fields(lat = coordinates.latitude, lon = coordinates.longitude))]
    pub fn estimate_at(
        &self,
        coordinates: Coordinates,
    ) -> Result<LightPollutionEstimate, InvalidInputError> {
        let sample = self.provider.sample_at(&coordinates).unwrap_or_else(|| {
            debug!("No radiance sample covers this location, using default");
            RadianceSample {
                radiance: DEFAULT_RADIANCE,
                data_year: None,
                source: Some(DEFAULT_SOURCE.to_string()),
            }
        });

        let mut estimate = self.converter.estimate_sample(&sample)?;
        estimate.coordinates = Some(coordinates);
        Ok(estimate)
    }

    /// Aggregate a region's samples; see [`RadianceConverter::region_statistics`].
    pub fn region_statistics(&self, samples: &[RadianceSample]) -> RegionStatistics {
        self.converter.region_statistics(samples)
    }
}
