//! Error types for the merge queue

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the pdf-merger library
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer than two documents were queued at merge time
    #[error("Need at least 2 PDF files to merge ({queued} queued)")]
    InsufficientDocuments { queued: usize },

    /// The output file could not be created or truncated
    #[error("Cannot create output file {}: {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error while writing an already opened output file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Date parsing error
    #[error("Invalid date expression: {0}")]
    InvalidDateExpression(String),

    /// Malformed `NAME:PAGES:AUTHOR` document specification
    #[error("Invalid document specification: {0}")]
    InvalidDocumentSpec(String),
}
