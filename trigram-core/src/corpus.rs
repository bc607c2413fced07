//! Corpus loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ReadError;

/// Reads a corpus file fully into memory as UTF-8 text.
///
/// # Errors
///
/// Returns `ReadError::Io` if the file is missing or unreadable.
/// Returns `ReadError::InvalidUtf8` if the contents are not valid UTF-8.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<String, ReadError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|e| ReadError::InvalidUtf8 {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;

    debug!(path = %path.display(), bytes = text.len(), "Loaded corpus");

    Ok(text)
}
