//! Thai-script shape checks for addresses and names.

/// First code point of the Thai Unicode block.
pub const THAI_BLOCK_START: char = '\u{0E00}';
/// Last code point of the Thai Unicode block.
pub const THAI_BLOCK_END: char = '\u{0E7F}';

/// True for any code point in U+0E00..=U+0E7F, assigned or not.
pub fn is_thai_char(ch: char) -> bool {
    (THAI_BLOCK_START..=THAI_BLOCK_END).contains(&ch)
}

pub fn contains_thai(value: &str) -> bool {
    value.chars().any(is_thai_char)
}

/// An address only needs to contain Thai script.
pub fn is_valid_address(value: &str) -> bool {
    !value.is_empty() && contains_thai(value)
}

/// A full name needs Thai script and at least one space separating the
/// given name from the surname.
pub fn is_valid_name(value: &str) -> bool {
    !value.is_empty() && contains_thai(value) && value.contains(' ')
}
