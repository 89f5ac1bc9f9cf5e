//! Streaming projection pipeline.
//!
//! Reads a delimited file row by row, keeps only the configured columns and
//! writes them to the output with the column set as header. The whole file is
//! never held in memory.
//!
//! # Example
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
//!
//!     println!("Wrote {} rows", summary.rows_written);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use super::columns::ColumnSet;
use crate::error::{ProjectResult, WriteError};
use crate::parser::{malformed, open_reader, read_headers};

/// Options for a projection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectOptions {
    /// Field delimiter for both input and output.
    pub delimiter: u8,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Result of a completed projection.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    /// Column names written as the output header.
    pub columns: Vec<String>,

    /// Number of data rows written (excluding the header).
    pub rows_written: usize,
}

/// Project `columns` from the file at `input` into a new file at `output`.
///
/// The output file is created or truncated. On error it is left as-is,
/// possibly partially written. Both files are closed on every exit path.
///
/// # Arguments
/// * `input` - Path to the delimited source file; first line must be a header
/// * `output` - Path to the destination file
/// * `columns` - The columns to keep, in output order
/// * `options` - Dialect options
///
/// # Returns
/// A `ProjectSummary` with the header written and the number of data rows
pub fn project_file(
    input: &Path,
    output: &Path,
    columns: &ColumnSet,
    options: &ProjectOptions,
) -> ProjectResult<ProjectSummary> {
    let mut reader = open_reader(input, options.delimiter)?;

    let file = File::create(output).map_err(|source| WriteError::Create {
        path: output.to_path_buf(),
        source,
    })?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(BufWriter::new(file));

    let summary = project(&mut reader, &mut writer, columns)?;

    writer.flush().map_err(WriteError::from)?;
    Ok(summary)
}

/// Stream records from `reader` to `writer`, keeping only `columns`.
///
/// The first output record is the column set itself; every following input
/// record yields exactly one output record with the selected fields in column
/// set order. Input row order is preserved.
pub fn project<R: Read, W: Write>(
    reader: &mut csv::Reader<R>,
    writer: &mut csv::Writer<W>,
    columns: &ColumnSet,
) -> ProjectResult<ProjectSummary> {
    let headers = read_headers(reader)?;
    let indices = columns.resolve(&headers)?;

    writer.write_record(columns.names()).map_err(write_error)?;

    let mut rows_written = 0;
    for result in reader.records() {
        let record = result.map_err(malformed)?;

        let fields = indices.iter().map(|&i| record.get(i).unwrap_or(""));
        writer.write_record(fields).map_err(write_error)?;

        rows_written += 1;
    }

    Ok(ProjectSummary {
        columns: columns.names().to_vec(),
        rows_written,
    })
}

/// Map a csv-level error on the write side into the write taxonomy.
fn write_error(err: csv::Error) -> WriteError {
    let message = err.to_string();

    match err.into_kind() {
        csv::ErrorKind::Io(e) => WriteError::Io(e),
        _ => WriteError::Record(message),
    }
}
