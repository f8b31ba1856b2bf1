//! Field-level validation rules.
//!
//! Every check is a pure predicate over a value that the caller has already
//! trimmed. None of them fail; a missing value is passed as `""` and is
//! simply invalid.

pub mod id;
pub mod thai;

use thaicheck_model::FieldKind;

pub use id::{ID_LENGTH, id_check_digit, is_valid_id};
pub use thai::{contains_thai, is_thai_char, is_valid_address, is_valid_name};

/// Runs the check that belongs to `kind`.
pub fn check_field(kind: FieldKind, value: &str) -> bool {
    match kind {
        FieldKind::Id => is_valid_id(value),
        FieldKind::Address => is_valid_address(value),
        FieldKind::Name => is_valid_name(value),
    }
}
