//! Photometric scale module
//!
//! This module is the shared leaf of both pipelines: the threshold tables and
//! formulas mapping SQM to Bortle class, naked-eye limiting magnitude, and
//! qualitative pollution level.

pub mod tables;
pub mod types;

pub use tables::{
    bortle_from_sqm, level_from_photo_signals, level_from_sqm, nelm_from_sqm, BORTLE_FALLBACK,
    PHOTO_BORTLE_STEPS, RADIANCE_BORTLE_STEPS,
};
pub use types::PollutionLevel;
