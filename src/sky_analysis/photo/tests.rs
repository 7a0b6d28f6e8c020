#[cfg(test)]
mod tests {
    use crate::sky_analysis::common::error::AnalysisError;
    use crate::sky_analysis::photo::analyzer::PhotoAnalyzer;
    use crate::sky_analysis::photo::types::AnalyzerConfig;
    use crate::sky_analysis::pixel::PixelBuffer;
    use crate::sky_analysis::scale::PollutionLevel;

    /// Flat RGB frame filled with one gray value.
    fn uniform_frame(width: usize, height: usize, value: u8) -> Vec<u8> {
        vec![value; width * height * 3]
    }

    /// Set one RGB pixel in a flat frame.
    fn set_pixel(data: &mut [u8], width: usize, x: usize, y: usize, value: u8) {
        let base = (y * width + x) * 3;
        data[base] = value;
        data[base + 1] = value;
        data[base + 2] = value;
    }

    #[test]
    fn test_all_black_frame() {
        let data = uniform_frame(64, 64, 0);
        let buffer = PixelBuffer::new(64, 64, 3, &data);
        let analyzer = PhotoAnalyzer::default();

        let metrics = analyzer.analyze(&buffer).unwrap();
        assert_eq!(metrics.star_count, 0);
        assert!(!metrics.horizon_glow_detected);
        assert_eq!(metrics.sqm_value, 22.0);
        assert_eq!(metrics.bortle_scale, 1);
        assert_eq!(metrics.average_brightness, 0.0);
        assert_eq!(metrics.sky_region_brightness, 0.0);
    }

    #[test]
    fn test_all_white_frame() {
        let data = uniform_frame(64, 64, 255);
        let buffer = PixelBuffer::new(64, 64, 3, &data);
        let analyzer = PhotoAnalyzer::default();

        let metrics = analyzer.analyze(&buffer).unwrap();
        assert_eq!(metrics.sqm_value, 10.0);
        assert_eq!(metrics.bortle_scale, 9);
        assert_eq!(metrics.star_count, 0);
        assert!(!metrics.horizon_glow_detected);
        assert_eq!(metrics.light_pollution_level, PollutionLevel::VeryPoor);
    }

    #[test]
    fn test_single_star_cluster() {
        // One isolated 5-pixel bright cluster on a dark background.
        let mut data = uniform_frame(64, 64, 5);
        for (x, y) in [(30, 20), (29, 20), (31, 20), (30, 19), (30, 21)] {
            set_pixel(&mut data, 64, x, y, 255);
        }
        let buffer = PixelBuffer::new(64, 64, 3, &data);
        let analyzer = PhotoAnalyzer::default();

        let metrics = analyzer.analyze(&buffer).unwrap();
        assert_eq!(metrics.star_count, 1);
    }

    #[test]
    fn test_oversized_bright_block_is_not_a_star() {
        // A 200x200 solid bright block far exceeds the component size cap.
        let mut data = uniform_frame(256, 256, 5);
        for y in 10..210 {
            for x in 10..210 {
                set_pixel(&mut data, 256, x, y, 255);
            }
        }
        let buffer = PixelBuffer::new(256, 256, 3, &data);
        let analyzer = PhotoAnalyzer::default();

        let metrics = analyzer.analyze(&buffer).unwrap();
        assert_eq!(metrics.star_count, 0);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let mut data = uniform_frame(80, 60, 12);
        for (x, y) in [(10, 10), (11, 10), (40, 20), (40, 21), (70, 5), (70, 6)] {
            set_pixel(&mut data, 80, x, y, 255);
        }
        let buffer = PixelBuffer::new(80, 60, 3, &data);
        let analyzer = PhotoAnalyzer::default();

        let first = analyzer.analyze(&buffer).unwrap();
        let second = analyzer.analyze(&buffer).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_horizon_glow_flagged() {
        // Dark sky over a bright bottom band.
        let mut data = uniform_frame(40, 100, 10);
        for y in 80..100 {
            for x in 0..40 {
                set_pixel(&mut data, 40, x, y, 120);
            }
        }
        let buffer = PixelBuffer::new(40, 100, 3, &data);
        let analyzer = PhotoAnalyzer::default();

        let metrics = analyzer.analyze(&buffer).unwrap();
        assert!(metrics.horizon_glow_detected);
    }

    #[test]
    fn test_uniform_frame_has_no_glow() {
        let data = uniform_frame(40, 100, 90);
        let buffer = PixelBuffer::new(40, 100, 3, &data);
        let analyzer = PhotoAnalyzer::default();

        let metrics = analyzer.analyze(&buffer).unwrap();
        assert!(!metrics.horizon_glow_detected);
    }

    #[test]
    fn test_sky_region_excludes_foreground() {
        // Bright foreground below the 70% line must not raise the sky
        // reading: rows 70..100 are excluded from it.
        let mut data = uniform_frame(40, 100, 10);
        for y in 70..100 {
            for x in 0..40 {
                set_pixel(&mut data, 40, x, y, 250);
            }
        }
        let buffer = PixelBuffer::new(40, 100, 3, &data);
        let analyzer = PhotoAnalyzer::default();

        let metrics = analyzer.analyze(&buffer).unwrap();
        assert!((metrics.sky_region_brightness - 10.0).abs() < 1e-9);
        assert!(metrics.average_brightness > metrics.sky_region_brightness);
    }

    #[test]
    fn test_color_temperature_blue_sky_is_cool() {
        let mut data = Vec::new();
        for _ in 0..16 * 16 {
            data.extend_from_slice(&[0, 0, 255]);
        }
        let buffer = PixelBuffer::new(16, 16, 3, &data);
        let analyzer = PhotoAnalyzer::default();

        let metrics = analyzer.analyze(&buffer).unwrap();
        assert_eq!(metrics.color_temperature, 10000);
    }

    #[test]
    fn test_color_temperature_red_sky_is_warm() {
        let mut data = Vec::new();
        for _ in 0..16 * 16 {
            data.extend_from_slice(&[255, 0, 0]);
        }
        let buffer = PixelBuffer::new(16, 16, 3, &data);
        let analyzer = PhotoAnalyzer::default();

        let metrics = analyzer.analyze(&buffer).unwrap();
        assert_eq!(metrics.color_temperature, 3000);
    }

    #[test]
    fn test_rgba_buffer_is_accepted() {
        let data = vec![0u8; 8 * 8 * 4];
        let buffer = PixelBuffer::new(8, 8, 4, &data);
        let analyzer = PhotoAnalyzer::default();

        let metrics = analyzer.analyze(&buffer).unwrap();
        assert_eq!(metrics.sqm_value, 22.0);
    }

    #[test]
    fn test_zero_width_rejected() {
        let buffer = PixelBuffer::new(0, 10, 3, &[]);
        let analyzer = PhotoAnalyzer::default();

        let result = analyzer.analyze(&buffer);
        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::InvalidDimensions(0, 10)
        ));
    }

    #[test]
    fn test_two_channel_buffer_rejected() {
        let data = vec![0u8; 10 * 10 * 2];
        let buffer = PixelBuffer::new(10, 10, 2, &data);
        let analyzer = PhotoAnalyzer::default();

        let result = analyzer.analyze(&buffer);
        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::UnsupportedChannels(2)
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let data = vec![0u8; 10];
        let buffer = PixelBuffer::new(10, 10, 3, &data);
        let analyzer = PhotoAnalyzer::default();

        let result = analyzer.analyze(&buffer);
        assert!(matches!(
            result.unwrap_err(),
            AnalysisError::BufferSizeMismatch { actual: 10, .. }
        ));
    }

    #[test]
    fn test_length_mismatch_rejected_even_without_dimension_validation() {
        let data = vec![0u8; 10];
        let buffer = PixelBuffer::new(10, 10, 3, &data);
        let config = AnalyzerConfig::builder().validate_dimensions(false).build();
        let analyzer = PhotoAnalyzer::new(config);

        assert!(analyzer.analyze(&buffer).is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = AnalyzerConfig::builder()
            .star_threshold(180)
            .star_size_range(3, 80)
            .glow_ratio(1.5)
            .validate_dimensions(false)
            .build();

        assert_eq!(config.star_threshold, 180);
        assert_eq!(config.min_star_size, 3);
        assert_eq!(config.max_star_size, 80);
        assert_eq!(config.glow_ratio, 1.5);
        assert!(!config.validate_dimensions);
        // Untouched fields keep their defaults.
        assert_eq!(config.sky_row_fraction, 0.7);
        assert_eq!(config.horizon_row_fraction, 0.2);
    }

    #[test]
    fn test_starry_dark_frame_classifies_well() {
        // Black background sprinkled with isolated 2-pixel stars in the sky
        // region: enough stars for the Good tier, not enough for Excellent.
        let mut data = uniform_frame(256, 256, 0);
        let mut placed = 0;
        let mut y = 2;
        while placed < 60 && y < 120 {
            let mut x = 2;
            while placed < 60 && x < 250 {
                set_pixel(&mut data, 256, x, y, 255);
                set_pixel(&mut data, 256, x + 1, y, 255);
                placed += 1;
                x += 8;
            }
            y += 8;
        }
        let buffer = PixelBuffer::new(256, 256, 3, &data);
        let analyzer = PhotoAnalyzer::default();

        let metrics = analyzer.analyze(&buffer).unwrap();
        assert_eq!(metrics.star_count, 60);
        assert!(metrics.sqm_value > 20.5);
        assert_eq!(metrics.light_pollution_level, PollutionLevel::Good);
    }
}
