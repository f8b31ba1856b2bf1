//! CSV reading utilities.

mod header;
mod reader;

pub use header::{normalize_header, normalize_headers};
pub use reader::{
    CsvRows, IngestOptions, MAX_CSV_FILE_SIZE, check_file_size_with_limit, read_csv_rows,
    read_csv_rows_from_reader, read_csv_rows_from_stream, validate_encoding,
};
