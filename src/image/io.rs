//! I/O helpers for packed-pixel images and JSON reports.
//!
//! - `load_grayscale`: read a PNG/PPM/JPEG/etc. into a grayscale [`Image`].
//! - `save_grayscale`: write an [`Image`]'s intensities to disk; binary
//!   outputs go through the same path since the palette values are plain
//!   gray levels.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::owned::Image;
use super::traits::Raster;
use crate::palette::{gray8, TupleType};
use crate::types::Pixel32;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, convert it to 8-bit grayscale and pack each
/// intensity into a `Pixel32`.
pub fn load_grayscale(path: &Path) -> Result<Image, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;

    let mut out = Image::new(width, height);
    out.tuple_type = TupleType::Grayscale;
    for (dst, px) in out.data.iter_mut().zip(img.pixels()) {
        *dst = px.0[0] as Pixel32;
    }
    Ok(out)
}

/// Save an image's intensity channel to disk. The format follows the file
/// extension (`.png`, `.ppm`, ...).
pub fn save_grayscale(image: &Image, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.width as u32, image.height as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([gray8(px)]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
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
