//! CSV header normalization.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Trims a header, drops a stray BOM and collapses inner whitespace runs.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a header record and rejects empty column names.
pub fn normalize_headers<'r, I>(raw: I, path: &Path) -> Result<Vec<String>>
where
    I: IntoIterator<Item = &'r str>,
{
    let headers: Vec<String> = raw.into_iter().map(normalize_header).collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    if let Some(position) = headers.iter().position(String::is_empty) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
            position,
        });
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  ID  "), "ID");
        assert_eq!(normalize_header("\u{feff}เลขบัตรประชาชน"), "เลขบัตรประชาชน");
        assert_eq!(normalize_header("id\t  card"), "id card");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn test_all_empty_headers() {
        let err = normalize_headers(["", " "], Path::new("x.csv")).unwrap_err();
        assert!(matches!(err, IngestError::NoHeaderDetected { .. }));
    }

    #[test]
    fn test_one_empty_header() {
        let err = normalize_headers(["ID", "", "Name"], Path::new("x.csv")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::EmptyColumnName { position: 1, .. }
        ));
    }

    #[test]
    fn test_headers_ok() {
        let headers = normalize_headers([" ID ", "ชื่อ"], Path::new("x.csv")).unwrap();
        assert_eq!(headers, vec!["ID", "ชื่อ"]);
    }
}
