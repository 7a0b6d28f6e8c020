//! Threshold tables and conversion formulas shared by both pipelines.
//!
//! All thresholds live here as plain data. The photo and radiance pipelines
//! are calibrated against different proxies (pixel brightness vs. satellite
//! radiance) and deliberately keep separate Bortle tables; see DESIGN.md.

use crate::sky_analysis::scale::types::PollutionLevel;

/// Bortle class returned when the SQM value falls below every table step.
pub const BORTLE_FALLBACK: u8 = 9;

/// Photo-path Bortle steps, `(minimum SQM, class)`.
///
/// The `>= 18.0` step resolves to class 7: the source table carries a
/// shadowed class-6 step at the same threshold, so classes 6 and 8 are never
/// produced on this path. Reproduced as-is, flagged as a source defect.
pub const PHOTO_BORTLE_STEPS: &[(f64, u8)] = &[
    (21.7, 1),
    (21.5, 2),
    (21.3, 3),
    (20.4, 4),
    (19.1, 5),
    (18.0, 7),
];

/// Radiance-path Bortle steps, `(minimum SQM, class)`.
pub const RADIANCE_BORTLE_STEPS: &[(f64, u8)] = &[
    (21.99, 1),
    (21.89, 2),
    (21.69, 3),
    (20.49, 4),
    (19.50, 5),
    (18.94, 6),
    (18.38, 7),
    (17.00, 8),
];

/// First-match step lookup over one of the Bortle tables.
pub fn bortle_from_sqm(sqm: f64, steps: &[(f64, u8)]) -> u8 {
    for &(threshold, class) in steps {
        if sqm >= threshold {
            return class;
        }
    }
    BORTLE_FALLBACK
}

/// Naked-eye limiting magnitude from an SQM reading, clamped to [3.0, 7.5].
pub fn nelm_from_sqm(sqm: f64) -> f64 {
    ((sqm - 11.0) / 2.0).clamp(3.0, 7.5)
}

/// Radiance-path pollution level: a 5-tier threshold on SQM alone.
///
/// Satellite data carries no star count or glow signal, so this rule is
/// simpler than the photo path's conjunction rule.
pub fn level_from_sqm(sqm: f64) -> PollutionLevel {
    if sqm >= 21.5 {
        PollutionLevel::Excellent
    } else if sqm >= 20.5 {
        PollutionLevel::Good
    } else if sqm >= 19.5 {
        PollutionLevel::Moderate
    } else if sqm >= 18.5 {
        PollutionLevel::Poor
    } else {
        PollutionLevel::VeryPoor
    }
}

/// Photo-path pollution level from the conjunction of three signals.
///
/// Tiers are checked in strict order, first match wins: a bright-but-starry
/// frame with horizon glow cannot qualify as Excellent.
pub fn level_from_photo_signals(sqm: f64, star_count: u32, horizon_glow: bool) -> PollutionLevel {
    if sqm > 21.5 && star_count > 100 && !horizon_glow {
        PollutionLevel::Excellent
    } else if sqm > 20.5 && star_count > 50 {
        PollutionLevel::Good
    } else if sqm > 19.0 && star_count > 20 {
        PollutionLevel::Moderate
    } else if sqm > 17.0 {
        PollutionLevel::Poor
    } else {
        PollutionLevel::VeryPoor
    }
}
