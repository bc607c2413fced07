//! Errors surfaced at the I/O boundaries.
//!
//! Counting and ranking cannot fail; only reading the corpus and writing
//! the table can.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::emit::Destination;

/// Errors that can occur while loading a corpus.
#[derive(Debug)]
pub enum ReadError {
    /// The file could not be opened or read.
    Io {
        /// Path of the corpus file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not valid UTF-8.
    InvalidUtf8 {
        /// Path of the corpus file.
        path: PathBuf,
        /// Byte offset of the first invalid sequence.
        valid_up_to: usize,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io { path, source } => {
                write!(f, "error reading file {}: {}", path.display(), source)
            }
            ReadError::InvalidUtf8 { path, valid_up_to } => {
                write!(
                    f,
                    "error reading file {}: invalid UTF-8 at byte {}",
                    path.display(),
                    valid_up_to
                )
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io { source, .. } => Some(source),
            ReadError::InvalidUtf8 { .. } => None,
        }
    }
}

/// Error that can occur while writing the trigram table.
#[derive(Debug)]
pub enum WriteError {
    /// The destination could not be created or written.
    Io {
        /// Where the table was going.
        destination: Destination,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::Io {
                destination,
                source,
            } => write!(f, "error writing output to {}: {}", destination, source),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Io { source, .. } => Some(source),
        }
    }
}
