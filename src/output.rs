//! Console output formatting for the thumbnail run.
//!
//! # Output Format
//!
//! ```text
//! 001 beach.PNG → beach_150px.jpg (150x113)
//! 002 tower.gif → tower_150px.jpg (38x150)
//!
//! Successfully created thumbnails.
//! Files can be found in:
//! /photos/thumbnails_150px
//! ```
//!
//! When nothing matches:
//!
//! ```text
//!
//! No supported files found.
//! Exiting program...
//! ```
//!
//! # Architecture
//!
//! Each message has a `format_*` function (returns `Vec<String>`) for
//! testability, and [`write_lines`] sends the lines to any writer. Format
//! functions are pure — no I/O, no side effects. Prompt text lives with the
//! prompts in [`prompt`](crate::prompt).

use crate::process::ProcessEvent;
use crate::scan::ScanError;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

/// Format a 1-based position as a zero-padded index (`001`, `042`, `1234`).
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Diagnostic for a source directory that could not be listed.
pub fn format_scan_failure(err: &ScanError) -> Vec<String> {
    vec![err.to_string()]
}

/// Message printed before exiting when no file matched a supported format.
pub fn format_no_supported_files() -> Vec<String> {
    vec![
        String::new(),
        "No supported files found.".to_string(),
        "Exiting program...".to_string(),
    ]
}

/// Format a single progress event.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::ThumbnailWritten {
            index,
            source,
            output,
            width,
            height,
        } => vec![format!(
            "{} {} → {} ({}x{})",
            format_index(*index),
            source,
            output,
            width,
            height
        )],
    }
}

/// Lexically tidy a path for display: drop `.` segments and trailing
/// separators, fold `dir/..` pairs. The filesystem is not consulted.
fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Final confirmation naming the destination directory.
pub fn format_completion(destination: &Path) -> Vec<String> {
    vec![
        String::new(),
        "Successfully created thumbnails.".to_string(),
        "Files can be found in:".to_string(),
        normalize_path(destination).display().to_string(),
    ]
}

/// Write formatted lines, one per line.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}
