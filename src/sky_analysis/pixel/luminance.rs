//! Shared luminance and channel statistics over pixel buffers.

use std::ops::Range;

use crate::sky_analysis::pixel::types::PixelBuffer;

/// Perceptual luminance of one pixel, ITU-R BT.601 weights.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64
}

/// Mean luminance over a window of rows.
///
/// The window is a deterministic, caller-chosen row range; an empty window
/// (or a clamped-away one) yields 0.0 rather than NaN.
pub fn mean_luminance(buffer: &PixelBuffer, rows: Range<usize>) -> f64 {
    let end = rows.end.min(buffer.height);
    let start = rows.start.min(end);
    let pixel_count = (end - start) * buffer.width;
    if pixel_count == 0 {
        return 0.0;
    }

    let mut sum = 0.0;
    for y in start..end {
        for x in 0..buffer.width {
            let (r, g, b) = buffer.rgb(x, y);
            sum += luminance(r, g, b);
        }
    }
    sum / pixel_count as f64
}

/// Whole-image per-channel means, `(red, green, blue)`.
pub fn channel_means(buffer: &PixelBuffer) -> (f64, f64, f64) {
    let pixel_count = buffer.width * buffer.height;
    if pixel_count == 0 {
        return (0.0, 0.0, 0.0);
    }

    let mut sums = (0.0, 0.0, 0.0);
    for y in 0..buffer.height {
        for x in 0..buffer.width {
            let (r, g, b) = buffer.rgb(x, y);
            sums.0 += r as f64;
            sums.1 += g as f64;
            sums.2 += b as f64;
        }
    }
    let n = pixel_count as f64;
    (sums.0 / n, sums.1 / n, sums.2 / n)
}

/// Grayscale conversion followed by a min-max contrast stretch to [0, 255].
///
/// A uniform image has no contrast to stretch and maps to all zeros.
pub fn grayscale_stretched(buffer: &PixelBuffer) -> Vec<u8> {
    let pixel_count = buffer.width * buffer.height;
    let mut gray = Vec::with_capacity(pixel_count);

    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for y in 0..buffer.height {
        for x in 0..buffer.width {
            let (r, g, b) = buffer.rgb(x, y);
            let value = luminance(r, g, b);
            min = min.min(value);
            max = max.max(value);
            gray.push(value);
        }
    }

    let range = max - min;
    if range <= f64::EPSILON {
        return vec![0u8; pixel_count];
    }

    gray.into_iter()
        .map(|value| (((value - min) / range) * 255.0).round().clamp(0.0, 255.0) as u8)
        .collect()
}
