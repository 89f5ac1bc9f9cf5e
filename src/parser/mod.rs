//! Header-aware CSV reading.
//!
//! Opens delimited files, exposes their header sequence and converts rows
//! into JSON objects keyed by column name. No projection logic here.

use serde_json::{json, Map, Value};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ReadError, ReadResult};

/// Result of parsing a whole file with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed records as JSON objects
    pub records: Vec<Value>,
    /// Delimiter used
    pub delimiter: u8,
    /// Column headers
    pub headers: Vec<String>,
}

/// Open a streaming CSV reader over a file.
///
/// The reader is strict: rows whose field count differs from the header
/// surface as errors when iterated.
pub fn open_reader(path: &Path, delimiter: u8) -> ReadResult<csv::Reader<File>> {
    let file = File::open(path).map_err(|source| ReadError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(file))
}

/// Read the header sequence from a reader.
///
/// Fails with [`ReadError::NoHeaders`] if the input has no header row at all.
pub fn read_headers<R: Read>(reader: &mut csv::Reader<R>) -> ReadResult<Vec<String>> {
    let headers = reader.headers().map_err(malformed)?;

    if headers.is_empty() {
        return Err(ReadError::NoHeaders);
    }

    Ok(headers.iter().map(|s| s.to_string()).collect())
}

/// Map a csv-level error into the read taxonomy, keeping the line number.
pub(crate) fn malformed(err: csv::Error) -> ReadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let message = err.to_string();

    match err.into_kind() {
        csv::ErrorKind::Io(e) => ReadError::Io(e),
        _ => ReadError::MalformedRow { line, message },
    }
}

/// Parse CSV content into JSON objects with explicit delimiter.
///
/// Each row becomes a JSON object where keys are column headers.
///
/// # Example
/// ```ignore
/// use colpick::csv_to_json;
///
/// let csv = "name,age\nAlice,30\nBob,25";
/// let rows = csv_to_json(csv, b',').unwrap();
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0]["name"], "Alice");
/// assert_eq!(rows[0]["age"], "30");
/// ```
pub fn csv_to_json(csv: &str, delimiter: u8) -> ReadResult<Vec<Value>> {
    parse_csv(csv.as_bytes(), delimiter)
}

/// Parse CSV from a reader into JSON objects.
pub fn parse_csv<R: Read>(reader: R, delimiter: u8) -> ReadResult<Vec<Value>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(reader);

    let headers = read_headers(&mut rdr)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(malformed)?;

        let mut obj = Map::new();
        for (i, header) in headers.iter().enumerate() {
            obj.insert(header.clone(), json!(record.get(i).unwrap_or("")));
        }

        rows.push(Value::Object(obj));
    }

    Ok(rows)
}

/// Parse a CSV file with explicit delimiter and return metadata.
pub fn parse_csv_file<P: AsRef<Path>>(path: P, delimiter: u8) -> ReadResult<ParseResult> {
    let mut reader = open_reader(path.as_ref(), delimiter)?;
    let headers = read_headers(&mut reader)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(malformed)?;

        let mut obj = Map::new();
        for (i, header) in headers.iter().enumerate() {
            obj.insert(header.clone(), json!(record.get(i).unwrap_or("")));
        }

        records.push(Value::Object(obj));
    }

    Ok(ParseResult {
        records,
        delimiter,
        headers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_simple_csv() {
        let csv = "name,age\nAlice,30\nBob,25";
        let rows = csv_to_json(csv, b',').unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Alice");
        assert_eq!(rows[0]["age"], "30");
        assert_eq!(rows[1]["name"], "Bob");
        assert_eq!(rows[1]["age"], "25");
    }

    #[test]
    fn test_semicolon_delimiter() {
        let csv = "a;b;c\n1;2;3";
        let rows = csv_to_json(csv, b';').unwrap();

        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["b"], "2");
        assert_eq!(rows[0]["c"], "3");
    }

    #[test]
    fn test_quoted_values() {
        let csv = "name,value\n\"Alice\",\"Hello, World\"";
        let rows = csv_to_json(csv, b',').unwrap();

        assert_eq!(rows[0]["name"], "Alice");
        assert_eq!(rows[0]["value"], "Hello, World");
    }

    #[test]
    fn test_quoted_newline() {
        let csv = "name,note\nAlice,\"line one\nline two\"";
        let rows = csv_to_json(csv, b',').unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["note"], "line one\nline two");
    }

    #[test]
    fn test_empty_values_kept() {
        let csv = "a,b,c\n1,,3";
        let rows = csv_to_json(csv, b',').unwrap();

        assert_eq!(rows[0]["a"], "1");
        assert_eq!(rows[0]["b"], "");
        assert_eq!(rows[0]["c"], "3");
    }

    #[test]
    fn test_ragged_row_is_error() {
        let csv = "a,b\n1,2,3";
        let err = csv_to_json(csv, b',').unwrap_err();

        match err {
            ReadError::MalformedRow { line, .. } => assert_eq!(line, 2),
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_has_no_headers() {
        let err = csv_to_json("", b',').unwrap_err();
        assert!(matches!(err, ReadError::NoHeaders));
    }

    #[test]
    fn test_parse_file_with_metadata() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "code,units\n1234-5,mg/dL\n").unwrap();

        let result = parse_csv_file(file.path(), b',').unwrap();

        assert_eq!(result.headers, vec!["code", "units"]);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0]["code"], "1234-5");
        assert_eq!(result.delimiter, b',');
    }

    #[test]
    fn test_open_reader_missing_file() {
        let err = open_reader(Path::new("/nonexistent/input.csv"), b',').unwrap_err();

        match err {
            ReadError::NotFound { path, .. } => {
                assert!(path.to_string_lossy().contains("input.csv"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
