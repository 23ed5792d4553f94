//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They sit between
//! the high-level [`operations`](super::operations) module (which decides the
//! output name and bounding box) and the [`backend`](super::backend) (which
//! decodes, resamples, and encodes). A mock backend can therefore record the
//! planned work without touching pixels.
//!
//! ## Types
//!
//! - [`Quality`] — JPEG encoding quality (1–100). Clamped on construction.
//! - [`ResizeParams`] — Full specification for a resize: source, output path, final dimensions, quality.

use std::path::PathBuf;

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(crate::config::JPEG_QUALITY)
    }
}

/// Parameters for a resize-and-encode operation.
///
/// `width` and `height` are the exact output dimensions. When they equal the
/// source dimensions the backend re-encodes without resampling.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}
