use skymetrics_rs::logger;
use skymetrics_rs::sky_analysis::{
    AnalyzerConfig, Coordinates, LightPollutionService, PhotoAnalyzer, PixelBuffer,
};

use tracing::{error, info};

/// Deterministic demo frame: a dark sky with a sprinkle of small bright
/// clusters and a brighter band along the bottom edge.
fn demo_frame(width: usize, height: usize) -> Vec<u8> {
    let mut data = vec![6u8; width * height * 3];

    let mut set = |x: usize, y: usize, value: u8| {
        let base = (y * width + x) * 3;
        data[base] = value;
        data[base + 1] = value;
        data[base + 2] = value;
    };

    for i in 0..40usize {
        let x = 7 + (i * 13) % (width - 10);
        let y = 5 + (i * 29) % (height / 2);
        set(x, y, 255);
        set(x + 1, y, 255);
    }

    let horizon_start = height - height / 6;
    for y in horizon_start..height {
        for x in 0..width {
            set(x, y, 70);
        }
    }

    data
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting skymetrics...");

    let config = AnalyzerConfig::builder().star_threshold(200).build();
    let analyzer = PhotoAnalyzer::new(config);

    info!("Photo analyzer initialized");
    info!("Star threshold: {}", analyzer.config().star_threshold);
    info!(
        "Star size window: [{}, {}]",
        analyzer.config().min_star_size,
        analyzer.config().max_star_size
    );

    let (width, height) = (640, 480);
    let data = demo_frame(width, height);
    let buffer = PixelBuffer::new(width, height, 3, &data);

    match analyzer.analyze(&buffer) {
        Ok(metrics) => info!(
            sqm = metrics.sqm_value,
            bortle = metrics.bortle_scale,
            stars = metrics.star_count,
            glow = metrics.horizon_glow_detected,
            kelvin = metrics.color_temperature,
            level = %metrics.light_pollution_level,
            "Photo analysis successful"
        ),
        Err(e) => error!("Photo analysis failed: {}", e),
    }

    let service = LightPollutionService::new();
    let coordinates = Coordinates {
        latitude: 48.21,
        longitude: 16.37,
    };
    match service.estimate_at(coordinates) {
        Ok(estimate) => info!(
            radiance = estimate.radiance,
            sqm = estimate.sqm,
            bortle = estimate.bortle_scale,
            nelm = estimate.nelm,
            level = %estimate.light_pollution_level,
            "Radiance estimate successful"
        ),
        Err(e) => error!("Radiance estimate failed: {}", e),
    }

    Ok(())
}
