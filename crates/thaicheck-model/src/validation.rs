use serde::{Deserialize, Serialize};

use crate::field::{FieldKind, FieldOutcome};
use crate::row::Row;

/// Validation result for a single input row.
///
/// Borrows the row it was produced from; the row is never modified.
#[derive(Debug, Clone, Serialize)]
pub struct RowValidation<'a> {
    /// Zero-based position of the row in the input sequence.
    pub index: usize,
    #[serde(skip)]
    pub row: &'a Row,
    pub id: FieldOutcome<'a>,
    pub address: FieldOutcome<'a>,
    pub name: FieldOutcome<'a>,
}

impl<'a> RowValidation<'a> {
    pub fn field(&self, kind: FieldKind) -> &FieldOutcome<'a> {
        match kind {
            FieldKind::Id => &self.id,
            FieldKind::Address => &self.address,
            FieldKind::Name => &self.name,
        }
    }

    pub fn is_id_valid(&self) -> bool {
        self.id.valid
    }

    pub fn is_address_valid(&self) -> bool {
        self.address.valid
    }

    pub fn is_name_valid(&self) -> bool {
        self.name.valid
    }

    /// True when all three fields passed.
    pub fn is_valid(&self) -> bool {
        self.id.valid && self.address.valid && self.name.valid
    }

    /// Kinds that failed, in report order.
    pub fn invalid_fields(&self) -> Vec<FieldKind> {
        FieldKind::ALL
            .into_iter()
            .filter(|kind| !self.field(*kind).valid)
            .collect()
    }
}

/// Pass/fail totals over a full validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Rows where every field is valid.
    pub valid: usize,
    pub total: usize,
}

impl Summary {
    pub fn invalid(&self) -> usize {
        self.total.saturating_sub(self.valid)
    }

    pub fn all_valid(&self) -> bool {
        self.valid == self.total
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.valid, self.total)
    }
}

/// Per-field failure counts over a full validation pass.
///
/// `unresolved_*` counts rows where no header matched the field; those rows
/// are also included in the matching `invalid_*` count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCounts {
    pub invalid_id: usize,
    pub invalid_address: usize,
    pub invalid_name: usize,
    pub unresolved_id: usize,
    pub unresolved_address: usize,
    pub unresolved_name: usize,
}

impl FieldCounts {
    pub fn invalid(&self, kind: FieldKind) -> usize {
        match kind {
            FieldKind::Id => self.invalid_id,
            FieldKind::Address => self.invalid_address,
            FieldKind::Name => self.invalid_name,
        }
    }

    pub fn unresolved(&self, kind: FieldKind) -> usize {
        match kind {
            FieldKind::Id => self.unresolved_id,
            FieldKind::Address => self.unresolved_address,
            FieldKind::Name => self.unresolved_name,
        }
    }

    /// Records one row's outcome for `kind`.
    pub fn record(&mut self, kind: FieldKind, outcome: &FieldOutcome<'_>) {
        let (invalid, unresolved) = match kind {
            FieldKind::Id => (&mut self.invalid_id, &mut self.unresolved_id),
            FieldKind::Address => (&mut self.invalid_address, &mut self.unresolved_address),
            FieldKind::Name => (&mut self.invalid_name, &mut self.unresolved_name),
        };
        if !outcome.valid {
            *invalid += 1;
        }
        if !outcome.is_resolved() {
            *unresolved += 1;
        }
    }
}
