use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::field::{FieldOutcome, ResolvedFields};
use crate::validation::{FieldCounts, RowValidation, Summary};

/// Machine-readable report of one validation pass.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport<'a> {
    /// Input label (file path or `-` for stdin).
    pub source: String,
    pub generated_at: DateTime<Utc>,
    pub summary: Summary,
    pub field_counts: FieldCounts,
    /// Columns resolved from the file header.
    pub columns: ResolvedFields<'a>,
    pub rows: Vec<RowReport<'a>>,
}

/// Per-row entry of a [`ValidationReport`].
#[derive(Debug, Clone, Serialize)]
pub struct RowReport<'a> {
    pub index: usize,
    pub valid: bool,
    pub id: FieldOutcome<'a>,
    pub address: FieldOutcome<'a>,
    pub name: FieldOutcome<'a>,
}

impl<'a> From<&RowValidation<'a>> for RowReport<'a> {
    fn from(result: &RowValidation<'a>) -> Self {
        Self {
            index: result.index,
            valid: result.is_valid(),
            id: result.id,
            address: result.address,
            name: result.name,
        }
    }
}

impl<'a> ValidationReport<'a> {
    pub fn new(
        source: impl Into<String>,
        columns: ResolvedFields<'a>,
        summary: Summary,
        field_counts: FieldCounts,
        results: &[RowValidation<'a>],
    ) -> Self {
        Self {
            source: source.into(),
            generated_at: Utc::now(),
            summary,
            field_counts,
            columns,
            rows: results.iter().map(RowReport::from).collect(),
        }
    }
}
