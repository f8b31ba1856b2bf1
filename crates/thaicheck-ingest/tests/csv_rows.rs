use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use thaicheck_ingest::{
    IngestError, IngestOptions, check_file_size_with_limit, read_csv_rows, validate_encoding,
};

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_thai_headers_with_bom() {
    let dir = TempDir::new().expect("temp dir");
    let contents = "\u{feff}เลขบัตรประชาชน,ชื่อ,ที่อยู่\n1234567890121,สมชาย ใจดี,กรุงเทพ\n";
    let path = write_file(&dir, "people.csv", contents.as_bytes());

    let data = read_csv_rows(&path, &IngestOptions::default()).expect("read csv");
    assert_eq!(data.headers, vec!["เลขบัตรประชาชน", "ชื่อ", "ที่อยู่"]);
    assert_eq!(data.rows.len(), 1);
    assert_eq!(data.rows[0].get("เลขบัตรประชาชน"), Some("1234567890121"));
    assert_eq!(data.rows[0].get("ชื่อ"), Some("สมชาย ใจดี"));
}

#[test]
fn keeps_cell_whitespace_for_the_engine() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "spaces.csv", b"ID, Name \n 123 ,x\n");

    let data = read_csv_rows(&path, &IngestOptions::default()).expect("read csv");
    assert_eq!(data.headers, vec!["ID", "Name"]);
    assert_eq!(data.rows[0].get("ID"), Some(" 123 "));
}

#[test]
fn missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing.csv");
    let err = read_csv_rows(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn rejects_large_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "big.csv", b"ID\n1234567890121\n");

    assert!(check_file_size_with_limit(&path, 1024).is_ok());
    let err = check_file_size_with_limit(&path, 4).unwrap_err();
    assert!(matches!(
        err,
        IngestError::FileTooLarge {
            size: 17,
            max_size: 4,
            ..
        }
    ));

    let options = IngestOptions { max_file_size: 4 };
    assert!(read_csv_rows(&path, &options).is_err());
}

#[test]
fn rejects_utf16() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "utf16.csv", &[0xFF, 0xFE, b'I', 0, b'D', 0]);

    let err = validate_encoding(&path).unwrap_err();
    assert!(matches!(
        err,
        IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
            ..
        }
    ));
}

#[test]
fn empty_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(&dir, "empty.csv", b"");
    let err = read_csv_rows(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}
