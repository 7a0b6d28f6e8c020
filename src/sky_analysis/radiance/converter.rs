use tracing::debug;

use crate::sky_analysis::{
    common::error::InvalidInputError,
    radiance::types::{LightPollutionEstimate, RadianceSample, RegionStatistics},
    scale::{bortle_from_sqm, level_from_sqm, nelm_from_sqm, RADIANCE_BORTLE_STEPS},
};

/// Radiance at or below which the sky reads as fully dark.
const DARK_SKY_RADIANCE: f64 = 0.5;
/// Floor of the SQM estimate for extreme urban radiance.
const URBAN_SQM_FLOOR: f64 = 15.0;

/// Converts satellite nighttime radiance into sky-darkness metrics.
///
/// Stateless; the conversion chain is radiance → SQM → Bortle → NELM →
/// pollution level, all through the shared photometric scale tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct RadianceConverter;

impl RadianceConverter {
    pub fn new() -> Self {
        Self
    }

    /// Piecewise-log radiance→SQM mapping, calibrated against satellite
    /// radiance. Not interchangeable with the photo path's brightness
    /// formula.
    pub fn sqm_from_radiance(radiance: f64) -> f64 {
        if radiance <= DARK_SKY_RADIANCE {
            22.0
        } else if radiance <= 2.0 {
            21.5 - radiance.log10() * 0.5
        } else if radiance <= 10.0 {
            21.0 - radiance.log10()
        } else if radiance <= 50.0 {
            20.0 - radiance.log10() * 1.5
        } else {
            (19.0 - radiance.log10() * 2.0).max(URBAN_SQM_FLOOR)
        }
    }

    /// Estimate sky darkness from one radiance value.
    ///
    /// Rejects negative and non-finite input; every non-negative finite
    /// radiance (including exactly 0) produces a fully-populated estimate.
    pub fn estimate(&self, radiance: f64) -> Result<LightPollutionEstimate, InvalidInputError> {
        if !radiance.is_finite() {
            return Err(InvalidInputError::NonFiniteRadiance(radiance));
        }
        if radiance < 0.0 {
            return Err(InvalidInputError::NegativeRadiance(radiance));
        }

        let sqm = Self::sqm_from_radiance(radiance);
        let bortle_scale = bortle_from_sqm(sqm, RADIANCE_BORTLE_STEPS);
        let nelm = nelm_from_sqm(sqm);
        let light_pollution_level = level_from_sqm(sqm);
        debug!(radiance, sqm, bortle_scale, nelm, "Radiance converted");

        Ok(LightPollutionEstimate {
            coordinates: None,
            radiance,
            sqm,
            bortle_scale,
            nelm,
            light_pollution_level,
            source: None,
            data_year: None,
        })
    }

    /// Estimate from a stored sample, threading its provenance through.
    pub fn estimate_sample(
        &self,
        sample: &RadianceSample,
    ) -> Result<LightPollutionEstimate, InvalidInputError> {
        let mut estimate = self.estimate(sample.radiance)?;
        estimate.source = sample.source.clone();
        estimate.data_year = sample.data_year;
        Ok(estimate)
    }

    /// Aggregate statistics over a region's samples: arithmetic mean of
    /// radiance, then one pass through the same SQM/Bortle formulas on the
    /// mean. An empty set yields the zero-radiance reading, not an error.
    pub fn region_statistics(&self, samples: &[RadianceSample]) -> RegionStatistics {
        let count = samples.len();
        let avg_radiance = if count == 0 {
            0.0
        } else {
            samples.iter().map(|s| s.radiance).sum::<f64>() / count as f64
        };

        let avg_sqm = Self::sqm_from_radiance(avg_radiance);
        let avg_bortle = bortle_from_sqm(avg_sqm, RADIANCE_BORTLE_STEPS);

        RegionStatistics {
            avg_radiance,
            avg_sqm,
            avg_bortle,
            count,
        }
    }
}
