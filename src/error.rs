//! Error types for the activity parser.
//!
//! Only input-level failures (unreadable files, undecodable bytes, broken
//! output streams) are errors. A field that fails to extract or a fragment
//! that fails the validity gate is silently skipped, never propagated.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for parser operations
pub type Result<T> = std::result::Result<T, ParserError>;

/// Errors that can occur while parsing activity exports.
#[derive(Error, Debug)]
pub enum ParserError {
    /// Failed to open or read an input file
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file contained bytes that are not valid UTF-8
    #[error("{} is not valid UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf },

    /// I/O error on an output stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding error while writing the export table
    #[error("CSV encoding error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding error while writing records
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: activity-parser [--sort] [--csv] <activity.html>...")]
    MissingArgument,

    /// Unrecognized command-line option
    #[error("Unrecognized option '{0}'. Usage: activity-parser [--sort] [--csv] <activity.html>...")]
    UnknownOption(String),
}
