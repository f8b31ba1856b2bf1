//! Header-based column discovery.
//!
//! A header matches a field kind when its lowercase form contains the kind's
//! English marker, or the header as written contains the kind's Thai marker.
//! The first matching header in column order wins; later matches only mark
//! the kind as ambiguous.

use thaicheck_model::{FieldKind, ResolvedFields, Row};

/// English marker, compared against the lowercased header.
pub fn english_marker(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Id => "id",
        FieldKind::Address => "address",
        FieldKind::Name => "name",
    }
}

/// Thai marker, compared against the header as written.
pub fn thai_marker(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Id => "บัตร",
        FieldKind::Address => "ที่อยู่",
        FieldKind::Name => "ชื่อ",
    }
}

pub fn header_matches(header: &str, kind: FieldKind) -> bool {
    header.to_lowercase().contains(english_marker(kind)) || header.contains(thai_marker(kind))
}

/// First header in `headers` that matches `kind`.
pub fn resolve_header<'a, I>(headers: I, kind: FieldKind) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    headers
        .into_iter()
        .find(|header| header_matches(header, kind))
}

/// Every header in `headers` that matches `kind`, in order.
pub fn matching_headers<'a, I>(headers: I, kind: FieldKind) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    headers
        .into_iter()
        .filter(|header| header_matches(header, kind))
        .collect()
}

/// Resolves all three field kinds against one header list.
pub fn resolve_fields<'a, I>(headers: I) -> ResolvedFields<'a>
where
    I: IntoIterator<Item = &'a str>,
{
    let headers: Vec<&'a str> = headers.into_iter().collect();
    let mut resolved = ResolvedFields::default();
    for kind in FieldKind::ALL {
        let candidates = matching_headers(headers.iter().copied(), kind);
        resolved.set(kind, candidates.first().copied());
        if candidates.len() > 1 {
            resolved.ambiguous.push(kind);
        }
    }
    resolved
}

/// Resolves the field columns of a single row.
pub fn resolve_row(row: &Row) -> ResolvedFields<'_> {
    resolve_fields(row.headers())
}
