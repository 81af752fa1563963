//! Error types for the devtools-pdf library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the devtools-pdf library
#[derive(Error, Debug)]
pub enum Error {
    /// A setter received an argument it cannot use
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// PDF parsing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// PDF structure is not what we expect
    #[error("Malformed PDF: {0}")]
    MalformedPdf(String),

    /// Printed PDF has no pages
    #[error("Printed PDF has no pages")]
    EmptyPdf,

    /// Printer returned no bytes at all
    #[error("Printer returned an empty document")]
    EmptyOutput,

    /// Failure reported by a page printer implementation
    #[error("Printer error: {0}")]
    Printer(String),
}
