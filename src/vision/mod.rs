//! Image normalization for outbound payloads.
//!
//! Uploaded images arrive in whatever raster format the client produced.
//! Providers receive a single canonical encoding: WebP, flattened to RGB,
//! as plain base64 text (the caller adds the data-URI prefix).

use crate::error::{RelayError, Result};
use base64::Engine;
use image::ImageFormat;
use std::io::Cursor;

/// Decode an uploaded image, drop any alpha channel, and re-encode it as
/// base64 WebP.
///
/// The input is an owned byte slice, so the caller keeps the original bytes
/// and can inspect them again independently of this call.
pub fn to_webp_base64(data: &[u8]) -> Result<String> {
    let img = image::load_from_memory(data)
        .map_err(|e| RelayError::ImageDecode(e.to_string()))?;

    // Flatten transparency: RGB conversion discards the alpha channel.
    let rgb = img.to_rgb8();

    let mut out = Cursor::new(Vec::new());
    rgb.write_to(&mut out, ImageFormat::WebP)
        .map_err(|e| RelayError::ImageDecode(format!("WebP encoding failed: {}", e)))?;

    Ok(base64::engine::general_purpose::STANDARD.encode(out.into_inner()))
}
