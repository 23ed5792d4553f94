//! Destination directory management.
//!
//! Thumbnails go into `<source>/thumbnails_<size>px`. The directory is
//! created fresh when possible. If it already exists the user decides
//! whether to write into it (same-named thumbnails get replaced) or stop.

use crate::config::ThumbnailSize;
use crate::naming::destination_dir_name;
use crate::prompt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DestinationError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Could not create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What to do after preparing the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Write thumbnails here.
    Ready(PathBuf),
    /// The directory existed and the user chose not to overwrite.
    Declined,
}

/// `<source>/thumbnails_<size>px`
pub fn destination_path(source: &Path, size: ThumbnailSize) -> PathBuf {
    source.join(destination_dir_name(size))
}

/// Create the destination directory, asking before reusing an existing one.
///
/// Creation is a single `mkdir`; the source directory must already exist.
pub fn prepare_destination<R: BufRead, W: Write>(
    source: &Path,
    size: ThumbnailSize,
    input: &mut R,
    out: &mut W,
) -> Result<Destination, DestinationError> {
    let path = destination_path(source, size);

    match fs::create_dir(&path) {
        Ok(()) => Ok(Destination::Ready(path)),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            writeln!(out, "Directory already exists, contents may be overwritten.")?;
            if prompt::confirm_overwrite(input, out)? {
                Ok(Destination::Ready(path))
            } else {
                writeln!(out, "Exiting program...")?;
                Ok(Destination::Declined)
            }
        }
        Err(err) => Err(DestinationError::Create { path, source: err }),
    }
}
