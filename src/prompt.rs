//! Validated interactive input.
//!
//! Every prompt loops until it gets an acceptable answer. Invalid answers are
//! never returned to the caller; they produce a warning line and the prompt
//! is repeated. The only way out besides a valid answer is the input stream
//! ending, which surfaces as [`io::ErrorKind::UnexpectedEof`].
//!
//! Prompts are generic over [`BufRead`] and [`Write`] so the binary can pass
//! locked stdin/stdout and tests can pass in-memory buffers.
//!
//! ```text
//! Please enter path to image directory:
//! /nowhere
//! Path not found.
//! Please enter path to image directory:
//! ~/Pictures/trip
//!
//! Please enter thumbnail size of longest edge (in pixels):
//! abc
//! Must be an integer. Please re-enter.
//! 150
//! ```

use crate::config::ThumbnailSize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub const DIRECTORY_PROMPT: &str = "Please enter path to image directory:";
pub const SIZE_PROMPT: &str = "Please enter thumbnail size of longest edge (in pixels):";
pub const OVERWRITE_PROMPT: &str = "Continue? (y/n) ";

const DIRECTORY_EMPTY: &str = "Directory is empty.";
const PATH_NOT_FOUND: &str = "Path not found.";
const NOT_AN_INTEGER: &str = "Must be an integer. Please re-enter.";
const NOT_POSITIVE: &str = "Must be a positive integer. Please re-enter.";

/// Outcome of checking a candidate source directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryCheck {
    Valid,
    Empty,
    NotFound,
}

/// Classify a candidate source directory.
///
/// Anything that is not a listable directory counts as not found.
pub fn check_directory(path: &Path) -> DirectoryCheck {
    if !path.is_dir() {
        return DirectoryCheck::NotFound;
    }
    match fs::read_dir(path) {
        Ok(mut entries) => {
            if entries.next().is_some() {
                DirectoryCheck::Valid
            } else {
                DirectoryCheck::Empty
            }
        }
        Err(_) => DirectoryCheck::NotFound,
    }
}

/// Outcome of parsing a size answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeInput {
    Valid(ThumbnailSize),
    NotInteger,
    NotPositive,
}

/// Parse a size answer. Surrounding whitespace is ignored.
///
/// Integers too large for a pixel count are treated as not an integer.
pub fn parse_size(answer: &str) -> SizeInput {
    let Ok(value) = answer.trim().parse::<i64>() else {
        return SizeInput::NotInteger;
    };
    if value <= 0 {
        return SizeInput::NotPositive;
    }
    match u32::try_from(value).ok().and_then(ThumbnailSize::new) {
        Some(size) => SizeInput::Valid(size),
        None => SizeInput::NotInteger,
    }
}

/// Parse an overwrite answer: `Some(true)` for y, `Some(false)` for n.
pub fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before a valid answer was given",
        ));
    }
    Ok(line)
}

/// Ask for the image directory until an existing, non-empty directory is given.
pub fn prompt_directory<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<PathBuf> {
    loop {
        writeln!(out, "{DIRECTORY_PROMPT}")?;
        out.flush()?;

        let path = PathBuf::from(read_answer(input)?.trim());
        match check_directory(&path) {
            DirectoryCheck::Valid => return Ok(path),
            DirectoryCheck::Empty => writeln!(out, "{DIRECTORY_EMPTY}")?,
            DirectoryCheck::NotFound => writeln!(out, "{PATH_NOT_FOUND}")?,
        }
    }
}

/// Ask for the thumbnail size until a positive integer is given.
///
/// The question is printed once; later attempts only show the warning.
pub fn prompt_size<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<ThumbnailSize> {
    writeln!(out)?;
    writeln!(out, "{SIZE_PROMPT}")?;
    out.flush()?;

    loop {
        match parse_size(&read_answer(input)?) {
            SizeInput::Valid(size) => return Ok(size),
            SizeInput::NotInteger => writeln!(out, "{NOT_AN_INTEGER}")?,
            SizeInput::NotPositive => writeln!(out, "{NOT_POSITIVE}")?,
        }
        out.flush()?;
    }
}

/// Ask `Continue? (y/n)` until y or n (any case) is given.
pub fn confirm_overwrite<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    loop {
        write!(out, "{OVERWRITE_PROMPT}")?;
        out.flush()?;

        if let Some(answer) = parse_confirmation(&read_answer(input)?) {
            return Ok(answer);
        }
    }
}
