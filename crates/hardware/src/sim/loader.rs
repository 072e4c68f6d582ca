//! Program Loader.
//!
//! This module turns LS-8 program text into a memory image. It performs:
//! 1. **Parsing:** Strips `#` comments and whitespace, skips empty lines, and
//!    reads each remaining line as one base-2 byte. A literal may carry a
//!    `0b` prefix and single `_` separators between digits (`0b1000_0010`).
//! 2. **File loading:** Reads a program file from disk.
//! 3. **Placement:** Writes the image into a CPU's memory from address 0.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::common::LoadError;
use crate::core::Cpu;

/// Comment delimiter; everything from here to the end of the line is ignored.
const COMMENT: char = '#';

/// Parses program text into a byte image.
///
/// # Errors
///
/// [`LoadError::Parse`] on the first line that is neither blank, a comment,
/// nor a base-2 literal in `0..=255`.
pub fn parse_program(text: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let code = raw.split_once(COMMENT).map_or(raw, |(code, _)| code).trim();
        if code.is_empty() {
            continue;
        }

        let byte = u8::from_str_radix(&binary_digits(code), 2).map_err(|source| LoadError::Parse {
            line: idx + 1,
            text: code.to_string(),
            source,
        })?;
        image.push(byte);
    }

    Ok(image)
}

/// Strips the optional `0b` prefix and digit separators from a literal.
///
/// A misplaced separator leaves the text unchanged so the radix parse rejects it.
fn binary_digits(code: &str) -> Cow<'_, str> {
    let unsigned = code.strip_prefix('+').unwrap_or(code);
    let body = match unsigned
        .strip_prefix("0b")
        .or_else(|| unsigned.strip_prefix("0B"))
    {
        // A separator may directly follow the prefix.
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None if unsigned.contains('_') => unsigned,
        None => return Cow::Borrowed(code),
    };

    if body.is_empty()
        || body.starts_with(['_', '+'])
        || body.ends_with('_')
        || body.contains("__")
    {
        return Cow::Borrowed(code);
    }
    Cow::Owned(body.replace('_', ""))
}

/// Reads and parses a program file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, otherwise any error from
/// [`parse_program`].
pub fn read_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&text)?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "program parsed");
    Ok(image)
}

/// Reads a program file and places it in `cpu`'s memory at address 0.
///
/// # Errors
///
/// Any error from [`read_program`], or [`LoadError::ProgramTooLarge`] if the
/// image does not fit in memory.
pub fn load_program<W: Write>(cpu: &mut Cpu<W>, path: impl AsRef<Path>) -> Result<(), LoadError> {
    let image = read_program(path)?;
    cpu.load_image(&image)
}
