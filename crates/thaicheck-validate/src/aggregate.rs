//! Reductions over a full set of row results.

use thaicheck_model::{FieldCounts, FieldKind, RowValidation, Summary};

/// Counts rows where every field passed.
pub fn summarize(results: &[RowValidation<'_>]) -> Summary {
    Summary {
        valid: results.iter().filter(|result| result.is_valid()).count(),
        total: results.len(),
    }
}

/// Counts failing and unresolved cells per field kind.
pub fn count_fields(results: &[RowValidation<'_>]) -> FieldCounts {
    let mut counts = FieldCounts::default();
    for result in results {
        for kind in FieldKind::ALL {
            counts.record(kind, result.field(kind));
        }
    }
    counts
}
