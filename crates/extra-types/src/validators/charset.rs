//! Character-class validators.

use crate::checksum::is_ascii_digits;
use crate::foundation::ValidationError;

crate::validator! {
    /// Non-empty and made only of ASCII digits `0-9`.
    ///
    /// Unicode digits from other scripts are rejected.
    pub AsciiDigits for str;
    rule(input) { is_ascii_digits(input) }
    error(input) {
        ValidationError::digit_format("ascii_digits", "Value must contain only ASCII digits")
    }
    fn ascii_digits();
}

crate::validator! {
    /// Non-empty and made only of ASCII hex digits, either case.
    pub HexDigits for str;
    rule(input) { !input.is_empty() && input.bytes().all(|b| b.is_ascii_hexdigit()) }
    error(input) {
        ValidationError::format("hex_digits", "Value must contain only hexadecimal digits")
    }
    fn hex_digits();
}
