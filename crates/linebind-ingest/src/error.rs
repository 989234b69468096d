//! Error types for line sources.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing lines.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open the source file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the next line (I/O error or invalid UTF-8).
    #[error("failed to read line {line_number}: {source}")]
    LineRead {
        line_number: usize,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// One-based number of the line that could not be produced, if known.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::LineRead { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}

/// Result type for line sources.
pub type Result<T> = std::result::Result<T, IngestError>;
