//! Error types for OFF reading and writing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for OFF operations.
pub type OffResult<T> = Result<T, OffError>;

/// Errors that can occur while reading or writing OFF data.
#[derive(Debug, Error)]
pub enum OffError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// First non-comment line is not `OFF`.
    #[error("invalid OFF header: {found:?}")]
    InvalidHeader {
        /// The line found instead.
        found: String,
    },

    /// A malformed count, vertex or face line.
    #[error("invalid OFF content at line {line}: {message}")]
    InvalidContent {
        /// 1-based line number.
        line: usize,
        /// Description of what was invalid.
        message: String,
    },

    /// Input ended before all declared elements were read.
    #[error("unexpected end of OFF data while reading {expected}")]
    UnexpectedEof {
        /// What was being read.
        expected: &'static str,
    },

    /// Face list length is not a multiple of the face arity.
    #[error("face list of {len} indices cannot be split into faces of {arity}")]
    FaceArity {
        /// Vertices per face.
        arity: usize,
        /// Number of indices supplied.
        len: usize,
    },

    /// A face refers to a vertex that is not in the vertex list.
    #[error("face index {index} out of range for {count} vertices")]
    IndexOutOfRange {
        /// Offending index.
        index: u32,
        /// Number of vertices.
        count: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OffError {
    /// Create an `InvalidContent` error for `line`.
    #[must_use]
    pub fn invalid_content(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidContent {
            line,
            message: message.into(),
        }
    }
}
