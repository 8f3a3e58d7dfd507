//! Error types for modfile.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for modfile operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing input descriptors or writing the
/// combined output file.
#[derive(Debug, Error)]
pub enum Error {
    /// An expected input file does not exist.
    #[error("missing input file: {}", .0.display())]
    MissingFile(PathBuf),

    /// Unexpected end of data while reading.
    #[error("unexpected end of data at offset {offset}, needed {needed} bytes")]
    UnexpectedEof {
        /// Offset where the read was attempted.
        offset: usize,
        /// Number of bytes needed.
        needed: usize,
    },

    /// String payload is not valid UTF-8.
    #[error("invalid UTF-8 string at offset {0}")]
    InvalidString(usize),

    /// A fixed sentinel field holds an unexpected value.
    #[error("invalid sentinel at offset {offset}: expected 0x{expected:08X}, got 0x{found:08X}")]
    InvalidSentinel {
        /// Offset of the sentinel field.
        offset: usize,
        /// Expected value.
        expected: u32,
        /// Value found in the data.
        found: u32,
    },

    /// Underlying I/O failure while writing the output file.
    #[error("output write failed: {0}")]
    Io(#[from] std::io::Error),
}
