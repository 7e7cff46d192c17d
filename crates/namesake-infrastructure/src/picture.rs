//! Picture helpers for favorites: JPEG re-encoding and brightness sampling.

use std::io::Cursor;

use image::ColorType;
use image::codecs::jpeg::JpegEncoder;

use namesake_core::error::{NamesakeError, Result};

/// JPEG quality used for stored pictures.
pub const JPEG_QUALITY: u8 = 80;

/// Decodes any supported format and re-encodes it as JPEG.
pub fn reencode_jpeg(bytes: &[u8], quality: u8) -> Result<Vec<u8>> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| NamesakeError::image(format!("Failed to decode image: {}", e)))?;
    // JPEG has no alpha channel.
    let rgb = decoded.to_rgb8();

    let mut out = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut out, quality);
    encoder
        .encode(rgb.as_raw(), rgb.width(), rgb.height(), ColorType::Rgb8)
        .map_err(|e| NamesakeError::image(format!("Failed to encode JPEG: {}", e)))?;

    tracing::debug!(
        width = rgb.width(),
        height = rgb.height(),
        input_bytes = bytes.len(),
        output_bytes = out.get_ref().len(),
        "Re-encoded image as JPEG"
    );
    Ok(out.into_inner())
}

/// Mean of all RGB channel values, normalized to `0.0..=1.0`.
pub fn average_brightness(bytes: &[u8]) -> Result<f32> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| NamesakeError::image(format!("Failed to decode image: {}", e)))?;
    let rgb = decoded.to_rgb8();
    let raw = rgb.as_raw();
    if raw.is_empty() {
        return Err(NamesakeError::image("Image has no pixels"));
    }

    let sum: u64 = raw.iter().map(|&v| v as u64).sum();
    Ok((sum as f64 / (raw.len() as f64 * 255.0)) as f32)
}
