//! Tests for the terminal rendering helpers.

use thaicheck_cli::render::{
    IdCheck, columns_table, counts_table, id_table, results_table, summary_line,
};
use thaicheck_model::{Row, Summary};
use thaicheck_validate::{count_fields, summarize, validate_rows};

fn sample_rows() -> Vec<Row> {
    vec![
        Row::from_pairs([
            ("เลขบัตรประชาชน", "1234567890121"),
            ("ชื่อ", "สมชาย ใจดี"),
            ("ที่อยู่", "กรุงเทพ"),
        ]),
        Row::from_pairs([
            ("เลขบัตรประชาชน", "1234567890122"),
            ("ชื่อ", "สมชาย"),
            ("ที่อยู่", ""),
        ]),
    ]
}

#[test]
fn summary_line_text() {
    insta::assert_snapshot!(summary_line(&Summary { valid: 2, total: 3 }), @"2/3 rows valid (1 invalid)");
    insta::assert_snapshot!(summary_line(&Summary::default()), @"0/0 rows valid (0 invalid)");
}

#[test]
fn results_table_lists_every_row() {
    let rows = sample_rows();
    let results = validate_rows(&rows);
    let mut table = results_table(&results, false);
    assert_eq!(table.row_iter().count(), 2);
    assert_eq!(table.column_count(), 5);
}

#[test]
fn results_table_invalid_only() {
    let rows = sample_rows();
    let results = validate_rows(&rows);
    let table = results_table(&results, true);
    assert_eq!(table.row_iter().count(), 1);
}

#[test]
fn counts_table_has_total_row() {
    let rows = sample_rows();
    let results = validate_rows(&rows);
    let table = counts_table(&summarize(&results), &count_fields(&results));
    // One row per field plus the total.
    assert_eq!(table.row_iter().count(), 4);
}

#[test]
fn columns_table_one_row_per_field() {
    let headers = vec!["ID".to_string(), "Name".to_string(), "ชื่อเล่น".to_string()];
    let table = columns_table(&headers);
    assert_eq!(table.row_iter().count(), 3);
}

#[test]
fn id_check_reports_expected_digit() {
    let check = IdCheck::new(" 1234567890122 ");
    assert_eq!(check.input, "1234567890122");
    assert!(!check.valid);
    assert_eq!(check.expected_digit, Some(1));

    let check = IdCheck::new("1234567890121");
    assert!(check.valid);
    assert_eq!(check.expected_digit, Some(1));
}

#[test]
fn id_check_twelve_digits_suggests_digit() {
    let check = IdCheck::new("110170023070");
    assert!(!check.valid);
    assert_eq!(check.expected_digit, Some(8));
}

#[test]
fn id_check_malformed_has_no_digit() {
    for raw in ["abc", "12345", "123456789012345", "๑๒๓๔๕๖๗๘๙๐๑๒๑"] {
        let check = IdCheck::new(raw);
        assert!(!check.valid, "{raw}");
        assert_eq!(check.expected_digit, None, "{raw}");
    }
    let table = id_table(&[IdCheck::new("abc")]);
    assert_eq!(table.row_iter().count(), 1);
}
