use crate::sky_analysis::radiance::types::{Coordinates, RadianceSample};

/// Radiance assumed for a location no satellite tile covers, nW/cm²/sr.
pub const DEFAULT_RADIANCE: f64 = 5.0;

/// Source tag attached to estimates produced from the fallback radiance.
pub const DEFAULT_SOURCE: &str = "default";

/// Spatial lookup against stored satellite tiles.
///
/// The store itself (nearest-neighbor search, tile ingestion) is an external
/// collaborator; the engine only consumes this seam. `None` means no tile
/// covers the queried coordinates.
pub trait RadianceProvider {
    fn sample_at(&self, coordinates: &Coordinates) -> Option<RadianceSample>;
}

/// Stock provider for deployments with no radiance store wired in: reports
/// every location as uncovered, so the service falls back to
/// [`DEFAULT_RADIANCE`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UncoveredProvider;

impl RadianceProvider for UncoveredProvider {
    fn sample_at(&self, _coordinates: &Coordinates) -> Option<RadianceSample> {
        None
    }
}
