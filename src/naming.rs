//! Centralized filename handling for inputs and outputs.
//!
//! ## Extensions
//!
//! A filename's extension is everything from the last `.` onwards, with the
//! dot included. Leading dots belong to the stem, so dotfiles have no
//! extension:
//! - `photo.PNG` → stem `photo`, extension `.PNG`
//! - `archive.tar.gif` → stem `archive.tar`, extension `.gif`
//! - `.jpg` → stem `.jpg`, no extension
//!
//! ## Output Names
//!
//! - Destination directory: `thumbnails_<size>px`
//! - Thumbnail file: `<stem>_<size>px.jpg`

use crate::config::ThumbnailSize;

/// Split a filename into `(stem, extension)`. The extension keeps its dot and
/// is empty when there is none.
pub fn split_extension(filename: &str) -> (&str, &str) {
    let leading_dots = filename.len() - filename.trim_start_matches('.').len();
    match filename[leading_dots..].rfind('.') {
        Some(pos) => filename.split_at(leading_dots + pos),
        None => (filename, ""),
    }
}

/// Lowercased extension (with dot) of a filename, if it has one.
pub fn extension_lowercase(filename: &str) -> Option<String> {
    let (_, ext) = split_extension(filename);
    (!ext.is_empty()).then(|| ext.to_lowercase())
}

/// Name of the destination subdirectory for a given size, e.g. `thumbnails_150px`.
pub fn destination_dir_name(size: ThumbnailSize) -> String {
    format!("thumbnails_{size}px")
}

/// Output filename for a thumbnail, e.g. `photo.PNG` at 150 → `photo_150px.jpg`.
pub fn thumbnail_filename(filename: &str, size: ThumbnailSize) -> String {
    let (stem, _) = split_extension(filename);
    format!("{stem}_{size}px.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(px: u32) -> ThumbnailSize {
        ThumbnailSize::new(px).unwrap()
    }

    #[test]
    fn split_simple() {
        assert_eq!(split_extension("photo.jpg"), ("photo", ".jpg"));
    }

    #[test]
    fn split_keeps_case() {
        assert_eq!(split_extension("photo.PNG"), ("photo", ".PNG"));
    }

    #[test]
    fn split_multiple_dots_uses_last() {
        assert_eq!(split_extension("archive.tar.gif"), ("archive.tar", ".gif"));
    }

    #[test]
    fn split_no_extension() {
        assert_eq!(split_extension("README"), ("README", ""));
    }

    #[test]
    fn split_dotfile_has_no_extension() {
        assert_eq!(split_extension(".jpg"), (".jpg", ""));
        assert_eq!(split_extension("..png"), ("..png", ""));
    }

    #[test]
    fn split_dotfile_with_extension() {
        assert_eq!(split_extension(".hidden.tif"), (".hidden", ".tif"));
    }

    #[test]
    fn split_trailing_dot() {
        assert_eq!(split_extension("odd."), ("odd", "."));
    }

    #[test]
    fn extension_lowercase_normalizes() {
        assert_eq!(extension_lowercase("A.JPEG").as_deref(), Some(".jpeg"));
        assert_eq!(extension_lowercase("noext"), None);
    }

    #[test]
    fn destination_dir_name_includes_size() {
        assert_eq!(destination_dir_name(size(150)), "thumbnails_150px");
        assert_eq!(destination_dir_name(size(1)), "thumbnails_1px");
    }

    #[test]
    fn thumbnail_filename_replaces_extension() {
        assert_eq!(thumbnail_filename("photo.PNG", size(150)), "photo_150px.jpg");
        assert_eq!(thumbnail_filename("scan.tiff", size(80)), "scan_80px.jpg");
    }

    #[test]
    fn thumbnail_filename_keeps_inner_dots() {
        assert_eq!(
            thumbnail_filename("2024.06.01-beach.jpeg", size(300)),
            "2024.06.01-beach_300px.jpg"
        );
    }
}
