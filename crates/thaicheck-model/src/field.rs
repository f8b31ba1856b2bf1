use serde::{Deserialize, Serialize};

/// The semantic fields checked on every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Thai national ID number.
    Id,
    /// Postal address in Thai script.
    Address,
    /// Full name (given name and surname) in Thai script.
    Name,
}

impl FieldKind {
    /// All kinds in report order.
    pub const ALL: [FieldKind; 3] = [FieldKind::Id, FieldKind::Address, FieldKind::Name];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Address => "Address",
            Self::Name => "Name",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Headers chosen as the source of each field for one row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedFields<'a> {
    pub id: Option<&'a str>,
    pub address: Option<&'a str>,
    pub name: Option<&'a str>,
    /// Kinds for which more than one header matched. The first match is
    /// still the one used.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ambiguous: Vec<FieldKind>,
}

impl<'a> ResolvedFields<'a> {
    pub fn get(&self, kind: FieldKind) -> Option<&'a str> {
        match kind {
            FieldKind::Id => self.id,
            FieldKind::Address => self.address,
            FieldKind::Name => self.name,
        }
    }

    pub fn set(&mut self, kind: FieldKind, header: Option<&'a str>) {
        match kind {
            FieldKind::Id => self.id = header,
            FieldKind::Address => self.address = header,
            FieldKind::Name => self.name = header,
        }
    }

    pub fn is_ambiguous(&self, kind: FieldKind) -> bool {
        self.ambiguous.contains(&kind)
    }

    /// True when none of the three fields found a header.
    pub fn is_empty(&self) -> bool {
        FieldKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }
}

/// Result of validating one field of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldOutcome<'a> {
    /// Header the value was read from, `None` when no column matched.
    pub header: Option<&'a str>,
    /// Trimmed value that was validated. Empty when the column is missing.
    pub value: &'a str,
    pub valid: bool,
}

impl FieldOutcome<'_> {
    pub fn is_resolved(&self) -> bool {
        self.header.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_fields_accessors() {
        let mut fields = ResolvedFields::default();
        assert!(fields.is_empty());
        fields.set(FieldKind::Name, Some("ชื่อ"));
        assert_eq!(fields.get(FieldKind::Name), Some("ชื่อ"));
        assert_eq!(fields.get(FieldKind::Id), None);
        assert!(!fields.is_empty());
    }

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&FieldKind::Address).expect("serialize kind");
        assert_eq!(json, "\"address\"");
    }
}
