use std::io::Cursor;

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;

use crate::foundation::{
    core::Canvas,
    error::{PixelforgeError, PixelforgeResult},
};

/// Encode `canvas` as PNG bytes.
pub fn encode_png(canvas: &Canvas) -> PixelforgeResult<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .context("encode canvas as png")?;
    Ok(bytes)
}

/// Decode encoded image bytes into a canvas; the format is auto-detected.
pub fn decode_image(bytes: &[u8]) -> PixelforgeResult<Canvas> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| PixelforgeError::decode(format!("decode image bytes: {e}")))?;
    Ok(image.to_rgba8())
}

/// Encode `canvas` as a Base64 string of PNG bytes.
pub fn image_to_base64(canvas: &Canvas) -> PixelforgeResult<String> {
    Ok(STANDARD.encode(encode_png(canvas)?))
}

/// Decode a Base64 string of encoded image bytes into a canvas.
pub fn base64_to_image(base64_string: &str) -> PixelforgeResult<Canvas> {
    let bytes = STANDARD
        .decode(base64_string)
        .map_err(|e| PixelforgeError::decode(format!("decode base64: {e}")))?;
    decode_image(&bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/png.rs"]
mod tests;
