//! Thai national ID checksum.
//!
//! A national ID is 13 decimal digits. The last digit is a check digit over
//! the first twelve, weighted 13 down to 2:
//!
//! ```text
//! sum      = d[0]*13 + d[1]*12 + ... + d[11]*2
//! expected = (11 - sum % 11) % 10
//! ```

/// Number of digits in a national ID.
pub const ID_LENGTH: usize = 13;

/// Returns the expected check digit for the first twelve digits of an ID.
///
/// `None` unless `prefix` is exactly 12 ASCII digits.
pub fn id_check_digit(prefix: &str) -> Option<u8> {
    let bytes = prefix.as_bytes();
    if bytes.len() != ID_LENGTH - 1 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let sum: u32 = bytes
        .iter()
        .enumerate()
        .map(|(idx, byte)| u32::from(byte - b'0') * (ID_LENGTH - idx) as u32)
        .sum();
    let checksum = sum % 11;
    Some(((11 - checksum) % 10) as u8)
}

/// True when `value` is a 13-digit ID with a correct check digit.
///
/// Thai digits (๐-๙) and any other non-ASCII digit are rejected.
pub fn is_valid_id(value: &str) -> bool {
    if value.len() != ID_LENGTH || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    let (prefix, last) = value.split_at(ID_LENGTH - 1);
    let actual = last.as_bytes()[0] - b'0';
    id_check_digit(prefix) == Some(actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_digit_examples() {
        // 1*13 + 2*12 + ... + 2*2 = 352, 352 % 11 = 0, (11 - 0) % 10 = 1
        assert_eq!(id_check_digit("123456789012"), Some(1));
        assert_eq!(id_check_digit("000000000000"), Some(1));
        assert_eq!(id_check_digit("999999999999"), Some(4));
        assert_eq!(id_check_digit("110170023070"), Some(8));
    }

    #[test]
    fn check_digit_rejects_bad_prefix() {
        assert_eq!(id_check_digit("12345678901"), None);
        assert_eq!(id_check_digit("1234567890123"), None);
        assert_eq!(id_check_digit("12345678901a"), None);
        assert_eq!(id_check_digit(""), None);
    }

    #[test]
    fn valid_ids() {
        assert!(is_valid_id("1234567890121"));
        assert!(is_valid_id("1101700230708"));
        assert!(is_valid_id("3100100123451"));
        assert!(is_valid_id("0000000000001"));
    }

    #[test]
    fn wrong_check_digit() {
        assert!(!is_valid_id("1234567890122"));
        assert!(!is_valid_id("1234567890120"));
        assert!(!is_valid_id("0000000000000"));
    }

    #[test]
    fn wrong_shape() {
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("123456789012"));
        assert!(!is_valid_id("12345678901210"));
        assert!(!is_valid_id("abcdefghijklm"));
        assert!(!is_valid_id("1-2345-67890-12-1"));
        assert!(!is_valid_id(" 1234567890121"));
        assert!(!is_valid_id("๑๒๓๔๕๖๗๘๙๐๑๒๑"));
    }
}
