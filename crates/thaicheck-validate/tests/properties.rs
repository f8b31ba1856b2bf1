//! Property tests for the field checks.

use proptest::prelude::*;

use thaicheck_model::FieldKind;
use thaicheck_validate::{header_matches, is_valid_address, is_valid_id, is_valid_name};

fn expected_check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .take(12)
        .enumerate()
        .map(|(idx, digit)| digit * (13 - idx as u32))
        .sum();
    (11 - sum % 11) % 10
}

proptest! {
    #[test]
    fn id_valid_iff_last_digit_matches(digits in proptest::collection::vec(0u32..10, 13)) {
        let id: String = digits
            .iter()
            .map(|digit| char::from_digit(*digit, 10).unwrap())
            .collect();
        let expected = expected_check_digit(&digits) == digits[12];
        prop_assert_eq!(is_valid_id(&id), expected);
    }

    #[test]
    fn id_with_correct_digit_is_valid(prefix in "[0-9]{12}") {
        let digits: Vec<u32> = prefix.chars().map(|ch| ch.to_digit(10).unwrap()).collect();
        let id = format!("{prefix}{}", expected_check_digit(&digits));
        prop_assert!(is_valid_id(&id));
    }

    #[test]
    fn id_rejects_wrong_length(digits in "[0-9]{0,12}|[0-9]{14,20}") {
        prop_assert!(!is_valid_id(&digits));
    }

    #[test]
    fn id_rejects_non_digits(prefix in "[0-9]{0,12}", bad in "[^0-9]", suffix in "[0-9]{0,12}") {
        let value = format!("{prefix}{bad}{suffix}");
        prop_assert!(!is_valid_id(&value));
    }

    #[test]
    fn ascii_text_is_never_thai(value in "[ -~]{0,40}") {
        prop_assert!(!is_valid_address(&value));
        prop_assert!(!is_valid_name(&value));
    }

    #[test]
    fn english_markers_match_any_case(prefix in "[a-z ]{0,5}", upper in proptest::bool::ANY) {
        let marker = if upper { "ADDRESS" } else { "Address" };
        let header = format!("{prefix}{marker}");
        prop_assert!(header_matches(&header, FieldKind::Address));
    }
}
