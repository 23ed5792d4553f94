//! Run configuration and fixed settings.
//!
//! There are no configuration files. A run is configured interactively (see
//! [`prompt`](crate::prompt)) and the result is captured once in an immutable
//! [`RunConfig`]. The recognized input formats and the output JPEG quality are
//! fixed constants.

use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

/// File extensions (lowercase, with leading dot) recognized as input images.
pub const SUPPORTED_FORMATS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".bmp", ".tif", ".tiff", ".gif", ".eps",
];

/// JPEG quality used for every thumbnail.
pub const JPEG_QUALITY: u32 = 95;

/// Maximum edge length of a thumbnail in pixels. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThumbnailSize(NonZeroU32);

impl ThumbnailSize {
    /// Returns `None` for zero.
    pub fn new(pixels: u32) -> Option<Self> {
        NonZeroU32::new(pixels).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Settings for a single run, built from validated prompt answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    source: PathBuf,
    size: ThumbnailSize,
}

impl RunConfig {
    pub fn new(source: impl Into<PathBuf>, size: ThumbnailSize) -> Self {
        Self {
            source: source.into(),
            size,
        }
    }

    /// Directory holding the original images.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn size(&self) -> ThumbnailSize {
        self.size
    }
}
