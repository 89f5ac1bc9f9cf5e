//! Error types for the projection pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`ReadError`] - input-side failures (missing file, malformed rows)
//! - [`WriteError`] - output-side failures
//! - [`ProjectError`] - top-level projection errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Read Errors
// =============================================================================

/// Errors while reading the input resource.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Input file missing or unreadable.
    #[error("Cannot read input file {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A data line inconsistent with the header or the quoting rules.
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    /// Input has no header row.
    #[error("No header row found in input")]
    NoHeaders,

    /// Other read failure.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Write Errors
// =============================================================================

/// Errors while writing the output resource.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Output file cannot be created or truncated.
    #[error("Cannot create output file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A record could not be encoded.
    #[error("Failed to write record: {0}")]
    Record(String),

    /// Write or flush failure.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Projection Errors (top-level)
// =============================================================================

/// Top-level errors for a projection run.
///
/// This is the main error type returned by [`crate::project::project_file`].
/// It wraps the read- and write-side errors and adds column-set variants.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Input-side error.
    #[error("Read error: {0}")]
    Read(#[from] ReadError),

    /// Output-side error.
    #[error("Write error: {0}")]
    Write(#[from] WriteError),

    /// A requested column is absent from the input header.
    #[error("Column not found in header: '{0}'")]
    MissingColumn(String),

    /// The requested column list is empty.
    #[error("No columns requested")]
    EmptyColumns,

    /// The requested column list names a column twice.
    #[error("Duplicate column requested: '{0}'")]
    DuplicateColumn(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for read operations.
pub type ReadResult<T> = Result<T, ReadError>;

/// Result type for write operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for projection operations.
pub type ProjectResult<T> = Result<T, ProjectError>;
