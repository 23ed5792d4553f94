//! The interactive run, start to finish.
//!
//! ```text
//! prompt directory → scan → (stop if nothing matched)
//!                  → prompt size → prepare destination → (stop if declined)
//!                  → generate thumbnails → confirmation
//! ```
//!
//! All prompts and messages go through the given reader and writer, so the
//! binary wires in stdin/stdout and tests wire in buffers. Each of the three
//! early stops is a normal [`RunOutcome`], not an error.

use crate::config::{RunConfig, SUPPORTED_FORMATS};
use crate::destination::{self, Destination, DestinationError};
use crate::imaging::ImageBackend;
use crate::output;
use crate::process::{self, ProcessError, ProcessRequest};
use crate::prompt;
use crate::scan;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error)]
pub enum RunError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Destination(#[from] DestinationError),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

// `main` reports a returned error through `Debug`; show the message there.
impl fmt::Debug for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Thumbnails were written.
    Completed {
        destination: PathBuf,
        written: Vec<PathBuf>,
    },
    /// The source directory held no file with a supported extension.
    NoSupportedFiles,
    /// The destination existed and the user chose not to overwrite it.
    OverwriteDeclined,
}

/// Run the whole interactive pipeline against `backend`.
pub fn run<R: BufRead, W: Write>(
    backend: &impl ImageBackend,
    input: &mut R,
    out: &mut W,
) -> Result<RunOutcome, RunError> {
    let source = prompt::prompt_directory(input, out)?;

    let files = match scan::list_supported_files(&source, SUPPORTED_FORMATS) {
        Ok(files) => files,
        Err(e) => {
            output::write_lines(out, &output::format_scan_failure(&e))?;
            Vec::new()
        }
    };
    if files.is_empty() {
        output::write_lines(out, &output::format_no_supported_files())?;
        return Ok(RunOutcome::NoSupportedFiles);
    }

    let size = prompt::prompt_size(input, out)?;
    let config = RunConfig::new(source, size);

    let destination =
        match destination::prepare_destination(config.source(), config.size(), input, out)? {
            Destination::Ready(path) => path,
            Destination::Declined => return Ok(RunOutcome::OverwriteDeclined),
        };

    let request = ProcessRequest {
        source_dir: config.source(),
        destination_dir: &destination,
        files: &files,
        size: config.size(),
    };
    let written = process::create_thumbnails_with_backend(backend, &request, |event| {
        output::write_lines(&mut *out, &output::format_process_event(event))
    })?;

    output::write_lines(out, &output::format_completion(&destination))?;

    Ok(RunOutcome::Completed {
        destination,
        written,
    })
}
