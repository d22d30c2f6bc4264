//! Document input from local files and stdin.
//!
//! A document is read once, whole, into memory. Any failure here is fatal for
//! the run; there is no default content to fall back to.

use std::fs;
use std::path::PathBuf;

use crate::{Result, SeoscopeError};

/// Reads a UTF-8 text document from a local file.
///
/// Returns [`SeoscopeError::FileNotFound`] when the path does not exist and
/// [`SeoscopeError::ReadError`] for any other I/O or encoding failure.
pub fn read_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(SeoscopeError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(SeoscopeError::from)
    }
}

/// Reads a text document from standard input until EOF.
pub fn read_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(SeoscopeError::from)?;

    Ok(buffer)
}

/// Reads a document from `source`, where `-` means standard input.
pub fn read_source(source: &str) -> Result<String> {
    if source == "-" { read_stdin() } else { read_file(source) }
}
