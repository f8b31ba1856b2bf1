//! Data model for Thai identity row validation.
//!
//! Rows come from an ingestion layer as ordered header/value pairs. The
//! validation engine borrows them and produces one [`RowValidation`] per row;
//! [`Summary`] and [`FieldCounts`] are derived from those results.

pub mod field;
pub mod report;
pub mod row;
pub mod validation;

pub use field::{FieldKind, FieldOutcome, ResolvedFields};
pub use report::{RowReport, ValidationReport};
pub use row::{Cell, Row};
pub use validation::{FieldCounts, RowValidation, Summary};
