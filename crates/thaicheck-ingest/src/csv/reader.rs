//! CSV file reading into ordered rows.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use thaicheck_model::Row;

use crate::error::{IngestError, Result};

use super::header::normalize_headers;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Options for loading a CSV file.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Files larger than this many bytes are rejected before parsing.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_CSV_FILE_SIZE,
        }
    }
}

/// Header row and data rows of one CSV source.
#[derive(Debug, Clone, Default)]
pub struct CsvRows {
    /// Normalized headers in column order.
    pub headers: Vec<String>,
    /// Data rows in file order. Empty lines are not rows.
    pub rows: Vec<Row>,
}

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

fn parse_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

/// Check file size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

fn utf16_bom(prefix: &[u8]) -> Option<&'static str> {
    match prefix {
        [0xFF, 0xFE, ..] => Some("UTF-16 LE"),
        [0xFE, 0xFF, ..] => Some("UTF-16 BE"),
        _ => None,
    }
}

fn reject_utf16(prefix: &[u8], path: &Path) -> Result<()> {
    match utf16_bom(prefix) {
        Some(encoding) => Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding,
        }),
        None => Ok(()),
    }
}

/// Reject files carrying a UTF-16 byte-order mark.
///
/// A UTF-8 BOM is accepted and stripped from the first header.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    reject_utf16(&buffer[..bytes_read], path)
}

/// Reads a CSV file into rows after size and encoding checks.
pub fn read_csv_rows(path: &Path, options: &IngestOptions) -> Result<CsvRows> {
    check_file_size_with_limit(path, options.max_file_size)?;
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    read_csv_rows_from_reader(file, path)
}

/// Reads a non-seekable source such as stdin with the same size and
/// encoding checks [`read_csv_rows`] applies to files.
///
/// At most `max_file_size + 1` bytes are read; a larger source fails with
/// [`IngestError::FileTooLarge`] reporting the bytes read so far.
pub fn read_csv_rows_from_stream<R: Read>(
    source: R,
    path: &Path,
    options: &IngestOptions,
) -> Result<CsvRows> {
    let mut buffer = Vec::new();
    source
        .take(options.max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let size = u64::try_from(buffer.len()).unwrap_or(u64::MAX);
    if size > options.max_file_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: options.max_file_size,
        });
    }
    reject_utf16(&buffer, path)?;
    read_csv_rows_from_reader(buffer.as_slice(), path)
}

/// Reads CSV data from any reader. `path` only labels errors and logs.
///
/// The first record is the header row. Short records are padded with empty
/// cells and cells beyond the last header are dropped. Empty lines are
/// skipped by the CSV reader; a record of empty cells such as `,` is kept.
pub fn read_csv_rows_from_reader<R: Read>(source: R, path: &Path) -> Result<CsvRows> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);
    let mut records = reader.records();

    let header_record = match records.next() {
        Some(record) => record.map_err(|e| parse_error(path, &e))?,
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };
    let headers = normalize_headers(header_record.iter(), path)?;
    warn_on_header_shape(&headers, path);

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|e| parse_error(path, &e))?;
        let mut row = Row::with_capacity(headers.len());
        for (idx, header) in headers.iter().enumerate() {
            row.insert(header.as_str(), record.get(idx).unwrap_or(""));
        }
        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read csv rows"
    );

    Ok(CsvRows { headers, rows })
}

fn warn_on_header_shape(headers: &[String], path: &Path) {
    if headers.len() > 500 {
        tracing::warn!(
            path = %path.display(),
            columns = headers.len(),
            "Dataset has more than 500 columns - may impact performance"
        );
    }

    let mut seen = BTreeSet::new();
    for header in headers {
        if !seen.insert(header.as_str()) {
            tracing::warn!(
                path = %path.display(),
                header = %header,
                "duplicate column header; later values overwrite earlier ones"
            );
        }
    }
}
