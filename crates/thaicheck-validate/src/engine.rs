//! Row validation engine.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use thaicheck_model::{FieldKind, FieldOutcome, ResolvedFields, Row, RowValidation};

use crate::checks::check_field;
use crate::resolver::{matching_headers, resolve_row};

/// Validates one row.
///
/// Columns are resolved once; each field's value defaults to `""` when no
/// header matched, and is trimmed before it is checked.
pub fn validate_row(index: usize, row: &Row) -> RowValidation<'_> {
    let resolved = resolve_row(row);
    validate_resolved(index, row, &resolved)
}

fn validate_resolved<'a>(
    index: usize,
    row: &'a Row,
    resolved: &ResolvedFields<'a>,
) -> RowValidation<'a> {
    let outcome = |kind: FieldKind| {
        let header = resolved.get(kind);
        let value = header.and_then(|key| row.get(key)).unwrap_or("").trim();
        FieldOutcome {
            header,
            value,
            valid: check_field(kind, value),
        }
    };
    RowValidation {
        index,
        row,
        id: outcome(FieldKind::Id),
        address: outcome(FieldKind::Address),
        name: outcome(FieldKind::Name),
    }
}

/// Validates every row, producing exactly one result per row in input order.
pub fn validate_rows(rows: &[Row]) -> Vec<RowValidation<'_>> {
    debug!(rows = rows.len(), "validating rows");
    let mut warned = BTreeSet::new();
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let resolved = resolve_row(row);
            for kind in &resolved.ambiguous {
                if warned.insert(*kind) {
                    warn_ambiguous(index, row, *kind, resolved.get(*kind));
                }
            }
            validate_resolved(index, row, &resolved)
        })
        .collect()
}

fn warn_ambiguous(index: usize, row: &Row, kind: FieldKind, chosen: Option<&str>) {
    let candidates = matching_headers(row.headers(), kind);
    warn!(
        row = index,
        field = %kind,
        chosen = chosen.unwrap_or_default(),
        candidates = ?candidates,
        "multiple columns match field; using the first"
    );
}
