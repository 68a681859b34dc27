//! Ink usage metric.

use image::RgbImage;

use crate::metrics::BLACK;

/// Counts pixels that are exactly pure black.
pub fn count_black_pixels(image: &RgbImage) -> u64 {
    image.pixels().filter(|p| **p == BLACK).count() as u64
}
