//! I/O helpers for frames and JSON reports.
//!
//! - `load_rgb_image`: read a PNG/JPEG into an owned RGB frame.
//! - `save_rgb_image`: write an owned RGB frame (e.g. an annotated copy).
//! - `save_grayscale_f32`: write an `ImageF32` to a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, RgbFrame};
use image::{GrayImage, Luma, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbFrame, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbFrame::from_raw(width, height, img.into_raw())
        .ok_or_else(|| format!("Unexpected buffer size decoding {}", path.display()))
}

/// Save an RGB frame to disk; the format follows the file extension.
pub fn save_rgb_image(frame: &RgbFrame, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = RgbImage::from_raw(
        frame.width() as u32,
        frame.height() as u32,
        frame.as_raw().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save a `[0, 1]` float plane (luma or an edge map) as an 8-bit grayscale
/// image. Out-of-range samples saturate.
pub fn save_grayscale_f32(plane: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out = GrayImage::from_fn(plane.w as u32, plane.h as u32, |x, y| {
        let v = plane.get(x as usize, y as usize);
        Luma([(v * 255.0).round().clamp(0.0, 255.0) as u8])
    });
    out.save(path)
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
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
