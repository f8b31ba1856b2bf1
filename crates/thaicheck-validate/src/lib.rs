//! Validation of Thai identity data rows.
//!
//! - **Checks**: national ID checksum, Thai-script address, Thai-script full name
//! - **Resolver**: finds the ID, address and name columns from header text
//! - **Engine**: resolves and checks every row, one result per row
//! - **Aggregate**: valid/total summary and per-field failure counts
//!
//! # Example
//!
//! ```
//! use thaicheck_model::Row;
//! use thaicheck_validate::{summarize, validate_rows};
//!
//! let rows = vec![Row::from_pairs([
//!     ("เลขบัตรประชาชน", "1234567890121"),
//!     ("ชื่อ", "สมชาย ใจดี"),
//!     ("ที่อยู่", "กรุงเทพ"),
//! ])];
//! let results = validate_rows(&rows);
//! assert!(results[0].is_valid());
//! assert_eq!(summarize(&results).valid, 1);
//! ```

mod aggregate;
pub mod checks;
mod engine;
pub mod resolver;

pub use aggregate::{count_fields, summarize};
pub use checks::{check_field, id_check_digit, is_valid_address, is_valid_id, is_valid_name};
pub use engine::{validate_row, validate_rows};
pub use resolver::{header_matches, matching_headers, resolve_fields, resolve_header, resolve_row};
