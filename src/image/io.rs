//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. and flatten it to an
//!   owned 8-bit gray buffer.
//! - `write_json_file`: pretty-print a serializable value to disk.
//! - `write_text_file`: write a text document (e.g. an SVG overlay) to disk.
//!
//! All decoding and filesystem failures are reported here; the detector
//! itself only ever sees validated grids and cannot fail.
use super::ImageU8;
use image::DynamicImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Load an image from disk and flatten it to 8-bit grayscale.
///
/// Any channel layout the `image` crate can decode is accepted; color is
/// reduced to luma and alpha is composited over an implicit black
/// background, so fully transparent pixels read as background.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    Ok(flatten_to_gray(img))
}

fn flatten_to_gray(img: DynamicImage) -> GrayImageU8 {
    let luma = img.into_luma_alpha8();
    let width = luma.width() as usize;
    let height = luma.height() as usize;
    let mut data = Vec::with_capacity(width * height);
    for px in luma.pixels() {
        let [l, a] = px.0;
        data.push((u16::from(l) * u16::from(a) / 255) as u8);
    }
    GrayImageU8::new(width, height, data)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

/// Write a text document to `path`, creating parent directories.
pub fn write_text_file(path: &Path, contents: &str) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, contents).map_err(|e| format!("Failed to write {}: {e}", path.display()))
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
