//! CSV ingestion for Thai identity validation.
//!
//! Loads a CSV file into ordered [`Row`](thaicheck_model::Row) values: the
//! first record is the header, empty lines are skipped, and every row
//! carries all header columns in file order.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use thaicheck_ingest::{IngestOptions, read_csv_rows};
//!
//! let data = read_csv_rows(Path::new("people.csv"), &IngestOptions::default())?;
//! println!("{} columns, {} rows", data.headers.len(), data.rows.len());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{
    CsvRows, IngestOptions, MAX_CSV_FILE_SIZE, check_file_size_with_limit, normalize_header,
    read_csv_rows, read_csv_rows_from_reader, read_csv_rows_from_stream, validate_encoding,
};
