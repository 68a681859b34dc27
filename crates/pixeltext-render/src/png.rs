//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so the same page always encodes to the
//! same bytes.

use std::io::Write;
use std::path::Path;

use image::RgbImage;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an RGB image to a PNG file.
///
/// The file is only created once encoding has succeeded. Returns the size of
/// the file in bytes and its BLAKE3 hash.
pub fn write_rgb(
    image: &RgbImage,
    path: &Path,
    config: &PngConfig,
) -> Result<(usize, String), PngError> {
    let (data, hash) = write_rgb_to_vec_with_hash(image, config)?;
    std::fs::write(path, &data)?;
    Ok((data.len(), hash))
}

/// Write an RGB image to any writer.
pub fn write_rgb_to_writer<W: Write>(
    image: &RgbImage,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    check_dimensions(image)?;

    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(image.as_raw())?;
    png_writer.finish()?;

    Ok(())
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a `Vec<u8>` and return the bytes with their hash.
pub fn write_rgb_to_vec_with_hash(
    image: &RgbImage,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(image, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

fn check_dimensions(image: &RgbImage) -> Result<(), PngError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "cannot encode a {}x{} image",
            image.width(),
            image.height()
        )));
    }
    Ok(())
}
