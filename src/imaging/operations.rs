//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::calculations::calculate_bounded_dimensions;
use super::params::{Quality, ResizeParams};
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// Configuration for thumbnail generation.
#[derive(Debug, Clone)]
pub struct ThumbnailConfig {
    /// Maximum length of either edge, in pixels.
    pub max_edge: u32,
    pub quality: Quality,
}

impl ThumbnailConfig {
    pub fn new(max_edge: u32) -> Self {
        Self {
            max_edge,
            quality: Quality::default(),
        }
    }
}

/// A thumbnail written by [`create_thumbnail`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedThumbnail {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Plan a thumbnail operation without executing it.
pub fn plan_thumbnail(
    source: &Path,
    output_path: &Path,
    original_dims: (u32, u32),
    config: &ThumbnailConfig,
) -> ResizeParams {
    let (width, height) = calculate_bounded_dimensions(original_dims, config.max_edge);

    ResizeParams {
        source: source.to_path_buf(),
        output: output_path.to_path_buf(),
        width,
        height,
        quality: config.quality,
    }
}

/// Create a bounded thumbnail of `source` at `output_path`.
///
/// Identifies the source, computes the bounded dimensions, then asks the
/// backend to resample and encode.
pub fn create_thumbnail(
    backend: &impl ImageBackend,
    source: &Path,
    output_path: &Path,
    config: &ThumbnailConfig,
) -> Result<GeneratedThumbnail> {
    let dims = get_dimensions(backend, source)?;
    let params = plan_thumbnail(source, output_path, dims, config);
    backend.resize(&params)?;

    Ok(GeneratedThumbnail {
        path: params.output,
        width: params.width,
        height: params.height,
    })
}
