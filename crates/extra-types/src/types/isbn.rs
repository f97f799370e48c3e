//! International Standard Book Numbers.
//!
//! Both ISBN-10 and ISBN-13 are accepted; the stored form is always the
//! 13-digit one.

use std::fmt;
use std::str::FromStr;

use crate::checksum::{is_ascii_digits, isbn10_check_digit, isbn13_check_digit};
use crate::foundation::{ErrorKind, ExtraType, ValidationError};

/// Prefixes an ISBN-13 may start with.
pub const ISBN13_PREFIXES: [&str; 2] = ["978", "979"];

// ============================================================================
// FORMAT CHECK
// ============================================================================

/// Checks that `value` is a well-formed ISBN-10 or ISBN-13.
///
/// Checks run in order and stop at the first failure: length, character
/// set, the `978`/`979` prefix (ISBN-13 only), then the check digit.
pub fn validate_isbn_format(value: &str) -> Result<(), ValidationError> {
    let length = value.chars().count();
    match length {
        10 => validate_isbn10(value),
        13 => validate_isbn13(value),
        _ => Err(ValidationError::length(
            "isbn_length",
            "Length for ISBN must be 10 or 13 digits, not {isbn_length}",
        )
        .with_param("isbn_length", length.to_string())),
    }
}

fn validate_isbn10(value: &str) -> Result<(), ValidationError> {
    let charset_error = || {
        ValidationError::digit_format(
            "isbn10_invalid_characters",
            "First 9 digits of ISBN-10 must be integers",
        )
    };

    let Some((idx, last)) = value.char_indices().next_back() else {
        return Err(charset_error());
    };
    if !is_ascii_digits(&value[..idx]) || !(last.is_ascii_digit() || last == 'X') {
        return Err(charset_error());
    }

    if isbn10_check_digit(value) != Some(last) {
        return Err(ValidationError::new(
            ErrorKind::CheckDigit,
            "isbn_invalid_digit_check_isbn10",
            "Provided digit is invalid for given ISBN",
        ));
    }

    Ok(())
}

fn validate_isbn13(value: &str) -> Result<(), ValidationError> {
    if !is_ascii_digits(value) {
        return Err(ValidationError::digit_format(
            "isbn13_invalid_characters",
            "All digits of ISBN-13 must be integers",
        ));
    }

    if !ISBN13_PREFIXES.contains(&&value[..3]) {
        return Err(ValidationError::new(
            ErrorKind::Prefix,
            "isbn_invalid_early_characters",
            "The first 3 digits of ISBN-13 must be 978 or 979",
        ));
    }

    if isbn13_check_digit(value) != value[12..].chars().next() {
        return Err(ValidationError::new(
            ErrorKind::CheckDigit,
            "isbn_invalid_digit_check_isbn13",
            "Provided digit is invalid for given ISBN",
        ));
    }

    Ok(())
}

/// Converts a validated ISBN-10 to its ISBN-13 form; ISBN-13 values pass
/// through unchanged.
///
/// Returns `None` for anything that is not a 10 or 13 character value.
///
/// ```
/// use nebula_extra_types::types::isbn::convert_isbn10_to_isbn13;
///
/// assert_eq!(convert_isbn10_to_isbn13("8537809667").as_deref(), Some("9788537809662"));
/// assert_eq!(convert_isbn10_to_isbn13("9788537809662").as_deref(), Some("9788537809662"));
/// ```
pub fn convert_isbn10_to_isbn13(value: &str) -> Option<String> {
    match value.len() {
        10 => {
            let mut isbn13 = format!("978{}", value.get(..9)?);
            let check = isbn13_check_digit(&isbn13)?;
            isbn13.push(check);
            Some(isbn13)
        }
        13 => Some(value.to_owned()),
        _ => None,
    }
}

// ============================================================================
// ISBN
// ============================================================================

/// A validated ISBN, stored as 13 digits.
///
/// # Examples
///
/// ```
/// use nebula_extra_types::types::Isbn;
///
/// let isbn: Isbn = "080442957X".parse().unwrap();
/// assert_eq!(isbn.as_str(), "9780804429573");
/// assert_eq!(isbn.to_isbn10().as_deref(), Some("080442957X"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Isbn(String);

impl Isbn {
    /// The 13-digit form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The GS1 prefix, `978` or `979`.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.0[..3]
    }

    /// The ISBN-10 form, available only for `978` numbers.
    #[must_use]
    pub fn to_isbn10(&self) -> Option<String> {
        if self.prefix() != "978" {
            return None;
        }
        let mut isbn10 = self.0[3..12].to_owned();
        isbn10.push(isbn10_check_digit(&isbn10)?);
        Some(isbn10)
    }
}

impl ExtraType for Isbn {
    const NAME: &'static str = "isbn";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        validate_isbn_format(raw)?;
        convert_isbn10_to_isbn13(raw)
            .map(Self)
            .ok_or_else(|| ValidationError::format("isbn_length", "ISBN could not be converted"))
    }

    fn normalized(&self) -> String {
        self.0.clone()
    }
}

impl FromStr for Isbn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ExtraType>::parse(s)
    }
}

impl TryFrom<String> for Isbn {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for Isbn {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Isbn> for String {
    fn from(value: Isbn) -> Self {
        value.0
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================
