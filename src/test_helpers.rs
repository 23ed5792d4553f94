//! Shared test utilities for the thumbgen test suite.
//!
//! Provides synthetic image writers and scripted console input.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = tempfile::TempDir::new().unwrap();
//! create_test_jpeg(&tmp.path().join("a.jpg"), 320, 240);
//!
//! let mut input = scripted(&[tmp.path().to_str().unwrap(), "150"]);
//! ```

use image::{ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

// =========================================================================
// Synthetic images
// =========================================================================

/// Write a small valid JPEG file with the given dimensions.
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write a PNG with a transparent gradient, to exercise alpha flattening.
pub fn create_test_png_rgba(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([200, (y % 256) as u8, 40, (x % 256) as u8])
    });
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

// =========================================================================
// Console input
// =========================================================================

/// Build a reader that answers prompts with `answers`, one per line.
pub fn scripted(answers: &[&str]) -> Cursor<Vec<u8>> {
    let mut text = String::new();
    for answer in answers {
        text.push_str(answer);
        text.push('\n');
    }
    Cursor::new(text.into_bytes())
}
