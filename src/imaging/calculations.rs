//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the dimensions of a thumbnail bounded by `max_edge` on both axes.
///
/// The source aspect ratio is preserved. Images that already fit inside the
/// bounding box keep their original dimensions (thumbnails never upscale).
/// Neither output dimension drops below 1 pixel.
///
/// # Arguments
/// * `original` - Source image dimensions (width, height)
/// * `max_edge` - Maximum length of either edge in pixels
///
/// # Examples
/// ```
/// # use thumbgen::imaging::calculate_bounded_dimensions;
/// // 4000x3000 landscape bounded at 150 → 150x113
/// assert_eq!(calculate_bounded_dimensions((4000, 3000), 150), (150, 113));
///
/// // Already small enough → unchanged
/// assert_eq!(calculate_bounded_dimensions((100, 80), 150), (100, 80));
/// ```
pub fn calculate_bounded_dimensions(original: (u32, u32), max_edge: u32) -> (u32, u32) {
    let (orig_w, orig_h) = original;

    if orig_w <= max_edge && orig_h <= max_edge {
        return original;
    }

    if orig_w >= orig_h {
        // Landscape or square: width is the longer edge
        let ratio = max_edge as f64 / orig_w as f64;
        (max_edge, scale_edge(orig_h, ratio))
    } else {
        // Portrait
        let ratio = max_edge as f64 / orig_h as f64;
        (scale_edge(orig_w, ratio), max_edge)
    }
}

fn scale_edge(edge: u32, ratio: f64) -> u32 {
    ((edge as f64 * ratio).round() as u32).max(1)
}
