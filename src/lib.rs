//! # Colpick - column projection over delimited files
//!
//! Colpick reads a delimited tabular file, keeps a fixed subset of named
//! columns and writes them to a new delimited file with a header, preserving
//! row order.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Input CSV  │────▶│   Parser    │────▶│  Projector  │────▶│  Output CSV │
//! │   (UTF-8)   │     │ (header-    │     │ (column     │     │ (header +   │
//! │             │     │  aware)     │     │  subset)    │     │  N rows)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use colpick::{project_file, ColumnSet, ProjectOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let columns = ColumnSet::parse(["code,units"])?;
//!     let summary = project_file(
//!         Path::new("input.csv"),
//!         Path::new("out.csv"),
//!         &columns,
//!         &ProjectOptions::default(),
//!     )?;
//!     println!("Wrote {} rows", summary.rows_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`parser`] - Header-aware CSV reading
//! - [`project`] - Column set and streaming projection

// Core modules
pub mod error;

// Parsing
pub mod parser;

// Projection
pub mod project;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ProjectError, ProjectResult, ReadError, ReadResult, WriteError, WriteResult,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    csv_to_json, open_reader, parse_csv, parse_csv_file, read_headers, ParseResult,
};

// =============================================================================
// Re-exports - Projection
// =============================================================================

pub use project::{project, project_file, ColumnSet, ProjectOptions, ProjectSummary};
