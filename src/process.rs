//! Thumbnail generation.
//!
//! Takes the scanned filenames and writes one JPEG thumbnail per file into the
//! destination directory:
//!
//! ```text
//! photos/
//! ├── beach.PNG
//! ├── scan.tiff
//! └── thumbnails_150px/
//!     ├── beach_150px.jpg      # longer edge ≤ 150px, quality 95
//!     └── scan_150px.jpg
//! ```
//!
//! Files are handled one at a time in the order given. The first failure
//! (unreadable file, undecodable image, failed write) stops the whole batch;
//! thumbnails written before it stay on disk.

use crate::config::ThumbnailSize;
use crate::imaging::{
    BackendError, GeneratedThumbnail, ImageBackend, ThumbnailConfig, create_thumbnail,
};
use crate::naming::thumbnail_filename;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
}

/// Everything needed to generate one batch.
#[derive(Debug, Clone)]
pub struct ProcessRequest<'a> {
    pub source_dir: &'a Path,
    pub destination_dir: &'a Path,
    pub files: &'a [String],
    pub size: ThumbnailSize,
}

/// Progress reported after each thumbnail is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessEvent {
    ThumbnailWritten {
        /// 1-based position in the batch.
        index: usize,
        source: String,
        output: String,
        width: u32,
        height: u32,
    },
}

/// Generate thumbnails for every file in `request`, in order.
pub fn create_thumbnails_with_backend(
    backend: &impl ImageBackend,
    request: &ProcessRequest<'_>,
    mut on_event: impl FnMut(&ProcessEvent) -> std::io::Result<()>,
) -> Result<Vec<PathBuf>, ProcessError> {
    let config = ThumbnailConfig::new(request.size.get());
    let mut written = Vec::with_capacity(request.files.len());

    for (position, filename) in request.files.iter().enumerate() {
        let source = request.source_dir.join(filename);
        let output_name = thumbnail_filename(filename, request.size);
        let output = request.destination_dir.join(&output_name);

        let GeneratedThumbnail {
            path,
            width,
            height,
        } = create_thumbnail(backend, &source, &output, &config)?;

        on_event(&ProcessEvent::ThumbnailWritten {
            index: position + 1,
            source: filename.clone(),
            output: output_name,
            width,
            height,
        })?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions { width, height }
    }

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn writes_one_thumbnail_per_file_in_order() {
        let backend = MockBackend::with_dimensions(vec![dims(4000, 3000), dims(100, 400)]);
        let names = files(&["beach.PNG", "tower.gif"]);
        let request = ProcessRequest {
            source_dir: Path::new("/photos"),
            destination_dir: Path::new("/photos/thumbnails_150px"),
            files: &names,
            size: ThumbnailSize::new(150).unwrap(),
        };

        let mut events = Vec::new();
        let written = create_thumbnails_with_backend(&backend, &request, |e| {
            events.push(e.clone());
            Ok(())
        })
        .unwrap();

        assert_eq!(
            written,
            vec![
                PathBuf::from("/photos/thumbnails_150px/beach_150px.jpg"),
                PathBuf::from("/photos/thumbnails_150px/tower_150px.jpg"),
            ]
        );

        let resizes: Vec<RecordedOp> = backend
            .get_operations()
            .into_iter()
            .filter(|op| matches!(op, RecordedOp::Resize { .. }))
            .collect();
        assert_eq!(
            resizes,
            vec![
                RecordedOp::Resize {
                    source: "/photos/beach.PNG".into(),
                    output: "/photos/thumbnails_150px/beach_150px.jpg".into(),
                    width: 150,
                    height: 113,
                    quality: 95,
                },
                RecordedOp::Resize {
                    source: "/photos/tower.gif".into(),
                    output: "/photos/thumbnails_150px/tower_150px.jpg".into(),
                    width: 38,
                    height: 150,
                    quality: 95,
                },
            ]
        );

        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            ProcessEvent::ThumbnailWritten {
                index: 2,
                source: "tower.gif".into(),
                output: "tower_150px.jpg".into(),
                width: 38,
                height: 150,
            }
        );
    }

    #[test]
    fn first_failure_aborts_batch() {
        let backend =
            MockBackend::failing_on(vec![dims(10, 10), dims(10, 10), dims(10, 10)], "bad.jpg");
        let names = files(&["ok.jpg", "bad.jpg", "never.jpg"]);
        let request = ProcessRequest {
            source_dir: Path::new("/in"),
            destination_dir: Path::new("/in/thumbnails_5px"),
            files: &names,
            size: ThumbnailSize::new(5).unwrap(),
        };

        let result = create_thumbnails_with_backend(&backend, &request, |_| Ok(()));
        assert!(matches!(result, Err(ProcessError::Imaging(_))));

        let ops = backend.get_operations();
        assert!(
            !ops.iter()
                .any(|op| matches!(op, RecordedOp::Identify(p) if p.ends_with("never.jpg")))
        );
        assert_eq!(
            ops.iter()
                .filter(|op| matches!(op, RecordedOp::Resize { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn empty_file_list_writes_nothing() {
        let backend = MockBackend::new();
        let request = ProcessRequest {
            source_dir: Path::new("/in"),
            destination_dir: Path::new("/in/thumbnails_5px"),
            files: &[],
            size: ThumbnailSize::new(5).unwrap(),
        };

        let written = create_thumbnails_with_backend(&backend, &request, |_| Ok(())).unwrap();
        assert!(written.is_empty());
        assert!(backend.get_operations().is_empty());
    }

    #[test]
    fn real_backend_bounds_longer_edge() {
        use crate::imaging::RustBackend;
        use crate::test_helpers::{create_test_jpeg, create_test_png_rgba};
        use image::GenericImageView;

        let tmp = tempfile::TempDir::new().unwrap();
        create_test_jpeg(&tmp.path().join("wide.jpg"), 300, 200);
        create_test_png_rgba(&tmp.path().join("Tall.PNG"), 50, 200);
        let dest = tmp.path().join("thumbnails_100px");
        std::fs::create_dir(&dest).unwrap();

        let names = files(&["wide.jpg", "Tall.PNG"]);
        let request = ProcessRequest {
            source_dir: tmp.path(),
            destination_dir: &dest,
            files: &names,
            size: ThumbnailSize::new(100).unwrap(),
        };

        create_thumbnails_with_backend(&RustBackend::new(), &request, |_| Ok(())).unwrap();

        let wide = image::open(dest.join("wide_100px.jpg")).unwrap();
        assert_eq!(wide.dimensions(), (100, 67));
        let tall = image::open(dest.join("Tall_100px.jpg")).unwrap();
        assert_eq!(tall.dimensions(), (25, 100));
    }
}
