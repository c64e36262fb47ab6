//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: read a JPEG/PNG/etc. into an owned RGB8 buffer.
//! - `save_rgb_image`: write an `ImageRgb8`, format chosen by extension.
//! - `save_rgb_jpeg`: write an `ImageRgb8` as JPEG with explicit quality.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::ImageRgb8;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, RgbImage};
use serde::Serialize;
use std::fs;
use std::io::BufWriter;
use std::path::Path;

/// Load an image from disk and convert to interleaved RGB8.
pub fn load_rgb_image(path: &Path) -> Result<ImageRgb8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    ImageRgb8::from_raw(width, height, img.into_raw())
        .ok_or_else(|| format!("Unexpected buffer size for {}", path.display()))
}

/// Save an RGB8 buffer; the container format is chosen by file extension.
pub fn save_rgb_image(img: &ImageRgb8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buffer: RgbImage = RgbImage::from_raw(img.w as u32, img.h as u32, img.data.clone())
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    buffer
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an RGB8 buffer as JPEG with the given quality (1-100).
pub fn save_rgb_jpeg(img: &ImageRgb8, path: &Path, quality: u8) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let file =
        fs::File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    let mut encoder = JpegEncoder::new_with_quality(BufWriter::new(file), quality);
    encoder
        .encode(
            &img.data,
            img.w as u32,
            img.h as u32,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| format!("Failed to encode {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
