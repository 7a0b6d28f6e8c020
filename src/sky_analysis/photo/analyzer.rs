use tracing::{debug, info, instrument};

use crate::sky_analysis::{
    common::error::{AnalysisError, Result},
    photo::stars,
    photo::types::{AnalyzerConfig, SkyMetrics},
    pixel::luminance::{channel_means, grayscale_stretched, mean_luminance},
    pixel::PixelBuffer,
    scale::{bortle_from_sqm, level_from_photo_signals, PHOTO_BORTLE_STEPS},
};

/// Upper clamp of the photo-path SQM estimate (pristine dark sky).
const SQM_CEILING: f64 = 22.0;
/// Lower clamp of the photo-path SQM estimate (saturated frame).
const SQM_FLOOR: f64 = 10.0;
/// Offset keeping the log term finite for an all-black sky region.
const LOG_EPSILON: f64 = 0.01;

/// Guard against division by zero in the blue-to-red ratio.
const CHANNEL_RATIO_EPSILON: f64 = 0.01;
const KELVIN_BASE: f64 = 3000.0;
const KELVIN_SLOPE: f64 = 4000.0;
const KELVIN_MIN: f64 = 2000.0;
const KELVIN_MAX: f64 = 10000.0;

/// Derives sky-darkness metrics from a decoded night-sky photograph.
///
/// Stateless and purely functional over its input: safe to share across
/// concurrent callers without coordination. Each call owns its intermediate
/// buffers exclusively and discards them on return.
pub struct PhotoAnalyzer {
    config: AnalyzerConfig,
}

impl PhotoAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalyzerConfig) {
        self.config = config;
    }

    fn validate(&self, buffer: &PixelBuffer) -> Result<()> {
        if self.config.validate_dimensions {
            if buffer.width == 0 || buffer.height == 0 {
                return Err(AnalysisError::InvalidDimensions(
                    buffer.width,
                    buffer.height,
                ));
            }
            if buffer.channels < 3 {
                return Err(AnalysisError::UnsupportedChannels(buffer.channels));
            }
        }

        // Length consistency is never skippable: every later stage indexes
        // the buffer by (y*width + x)*channels.
        if buffer.data.len() != buffer.expected_len() {
            return Err(AnalysisError::BufferSizeMismatch {
                width: buffer.width,
                height: buffer.height,
                channels: buffer.channels,
                actual: buffer.data.len(),
            });
        }

        Ok(())
    }

    /// Run the full analysis pipeline over one decoded frame.
    ///
    /// Fails only on a malformed buffer. Degenerate imagery (uniform black,
    /// uniform white, starless cloud cover) produces a valid clamped record.
    #[instrument(skip(self, buffer), fields(width = buffer.width, height = buffer.height))]
    pub fn analyze(&self, buffer: &PixelBuffer) -> Result<SkyMetrics> {
        self.validate(buffer)?;

        let (average_brightness, sky_region_brightness, horizon_glow_detected) = {
            let _span = tracing::info_span!("brightness_extraction").entered();
            let average = mean_luminance(buffer, 0..buffer.height);

            let sky_rows = (buffer.height as f64 * self.config.sky_row_fraction).floor() as usize;
            let sky = mean_luminance(buffer, 0..sky_rows);

            let horizon_start = (buffer.height as f64
                * (1.0 - self.config.horizon_row_fraction))
                .floor() as usize;
            let horizon = mean_luminance(buffer, horizon_start..buffer.height);

            let reference_rows = (buffer.height as f64 * self.config.glow_reference_fraction)
                .floor() as usize;
            let reference = mean_luminance(buffer, 0..reference_rows);

            let glow = horizon > self.config.glow_ratio * reference;
            debug!(average, sky, horizon, reference, glow, "Brightness windows");
            (average, sky, glow)
        };

        let star_count = {
            let _span = tracing::info_span!("star_detection").entered();
            let gray = grayscale_stretched(buffer);
            stars::count_stars(&gray, buffer.width, buffer.height, &self.config)
        };

        let color_temperature = {
            let _span = tracing::info_span!("color_temperature").entered();
            let (r_mean, _g_mean, b_mean) = channel_means(buffer);
            let ratio = b_mean / (r_mean + CHANNEL_RATIO_EPSILON);
            (KELVIN_BASE + ratio * KELVIN_SLOPE).clamp(KELVIN_MIN, KELVIN_MAX) as u32
        };

        let sqm_value = sqm_from_sky_brightness(sky_region_brightness);
        let bortle_scale = bortle_from_sqm(sqm_value, PHOTO_BORTLE_STEPS);
        let light_pollution_level =
            level_from_photo_signals(sqm_value, star_count, horizon_glow_detected);

        info!(
            sqm = sqm_value,
            bortle = bortle_scale,
            stars = star_count,
            glow = horizon_glow_detected,
            "Analysis complete"
        );

        Ok(SkyMetrics {
            average_brightness,
            sky_region_brightness,
            star_count,
            horizon_glow_detected,
            color_temperature,
            sqm_value,
            bortle_scale,
            light_pollution_level,
        })
    }
}

impl Default for PhotoAnalyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

/// Map mean sky-region brightness (0-255) onto the SQM scale.
///
/// The log-brightness term spans [0, ~2] over the normalized input range and
/// is scaled onto [SQM_FLOOR, SQM_CEILING]: a darker sky region reads as a
/// higher SQM. Clamped, then rounded to 2 decimals.
fn sqm_from_sky_brightness(mean_brightness: f64) -> f64 {
    let normalized = mean_brightness / 255.0;
    let log_term = (normalized + LOG_EPSILON).log10() - LOG_EPSILON.log10();
    let scale = (SQM_CEILING - SQM_FLOOR) / -LOG_EPSILON.log10();
    let sqm = (SQM_CEILING - log_term * scale).clamp(SQM_FLOOR, SQM_CEILING);
    (sqm * 100.0).round() / 100.0
}
