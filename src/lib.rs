//! # thumbgen
//!
//! Batch-converts the images in one directory into bounded JPEG thumbnails,
//! written to a size-named subdirectory next to the originals.
//!
//! # The Run
//!
//! A run is fully interactive and strictly linear:
//!
//! ```text
//! 1. Directory   ask until an existing, non-empty directory is given
//! 2. Scan        keep files with a supported extension (stop if none)
//! 3. Size        ask until a positive integer is given
//! 4. Destination create <source>/thumbnails_<size>px, or confirm reuse (stop if declined)
//! 5. Generate    one <stem>_<size>px.jpg per file, longer edge ≤ size, quality 95
//! ```
//!
//! Invalid answers are re-prompted rather than reported as errors. A missing
//! file list and a declined overwrite end the run cleanly. A file that fails
//! to decode or encode aborts the whole batch.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pipeline`] | Wires the steps above together against any reader/writer |
//! | [`prompt`] | Validated directory, size, and y/n prompts |
//! | [`scan`] | Lists a directory and filters by extension |
//! | [`destination`] | Creates or confirms the thumbnail directory |
//! | [`process`] | Generates the thumbnails, one file at a time |
//! | [`imaging`] | `image`-crate backend: identify, bounded resize, JPEG encode |
//! | [`naming`] | Extension splitting and output names |
//! | [`config`] | Supported formats, JPEG quality, and the per-run [`config::RunConfig`] |
//! | [`output`] | Console message formatting |
//!
//! # Supported Inputs
//!
//! `.jpg .jpeg .png .bmp .tif .tiff .gif .eps`, matched case-insensitively.
//! EPS files are recognized but cannot be decoded; one in the batch aborts
//! the run when it is reached.

pub mod config;
pub mod destination;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod process;
pub mod prompt;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
