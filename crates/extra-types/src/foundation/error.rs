//! Error types for validation failures
//!
//! Every value type in this crate fails with a [`ValidationError`]: an
//! [`ErrorKind`] to branch on, a machine-readable `code` (stable across
//! releases, e.g. `payment_card_number_luhn`), a human-readable message
//! template and an ordered set of template parameters.
//!
//! All string fields use `Cow<'static, str>` so the common case of static
//! codes and messages does not allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Category of a validation failure.
///
/// Several codes share a kind (both ISBN charset codes are
/// [`ErrorKind::DigitFormat`]); [`ValidationError::code`] is the precise tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// Non-digit characters where only digits are accepted.
    DigitFormat,
    /// Length outside the allowed set or range.
    Length,
    /// A weighted checksum did not come out to zero.
    Checksum,
    /// The Luhn (mod 10) check failed.
    Luhn,
    /// A trailing check digit does not match the computed one.
    CheckDigit,
    /// A required leading literal is missing.
    Prefix,
    /// Length is inconsistent with the classified payment card brand.
    BrandLength,
    /// Structural mismatch: separators, segment widths, non-hex characters.
    Format,
    /// A numeric value lies outside its permitted interval.
    Range,
    /// Anything raised by user code through [`ValidationError::custom`].
    Custom,
}

impl ErrorKind {
    /// Stable snake_case name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DigitFormat => "digit_format",
            Self::Length => "length",
            Self::Checksum => "checksum",
            Self::Luhn => "luhn",
            Self::CheckDigit => "check_digit",
            Self::Prefix => "prefix",
            Self::BrandLength => "brand_length",
            Self::Format => "format",
            Self::Range => "range",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Template parameters. Almost every error carries zero to two of them.
pub type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use nebula_extra_types::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new(ErrorKind::Length, "isbn_length", "Length for ISBN must be 10 or 13 digits")
///     .with_param("actual", "12");
///
/// assert_eq!(error.kind, ErrorKind::Length);
/// assert_eq!(error.param("actual"), Some("12"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Category of the failure.
    pub kind: ErrorKind,

    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "payment_card_number_luhn", "isbn_length", "mac_address_format"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional field path, filled in by the embedding framework.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message template, in insertion order.
    pub params: Params,

    /// Nested validation errors (combinators wrap the original failure here).
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a kind, code and message.
    pub fn new(
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Returns the number of errors (including nested).
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .nested
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// Flattens all errors into a single list (depth-first).
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }

    /// Renders the message template with its parameters substituted.
    ///
    /// Placeholders are written `{name}`; unknown placeholders are left as is.
    #[must_use]
    pub fn rendered_message(&self) -> String {
        let mut out = self.message.to_string();
        for (key, value) in &self.params {
            out = out.replace(&format!("{{{key}}}"), value);
        }
        out
    }

    /// Converts the error to a JSON value.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "kind": self.kind.as_str(),
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
            "nested": self.nested.iter().map(ValidationError::to_json_value).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.rendered_message())?;
        } else {
            write!(f, "{}: {}", self.code, self.rendered_message())?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A digit-only constraint was violated.
    pub fn digit_format(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::DigitFormat, code, message)
    }

    /// A length constraint was violated.
    pub fn length(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::Length, code, message)
    }

    /// A structural format constraint was violated.
    pub fn format(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::Format, code, message)
    }

    /// A numeric value fell outside `[min, max]`.
    pub fn out_of_range<T: fmt::Display>(
        code: impl Into<Cow<'static, str>>,
        min: T,
        max: T,
        actual: T,
    ) -> Self {
        Self::new(ErrorKind::Range, code, "Value must be between {min} and {max}")
            .with_param("min", min.to_string())
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Custom, "custom", message)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts to a single error with nested errors.
    pub fn into_single_error(self, message: impl Into<Cow<'static, str>>) -> ValidationError {
        ValidationError::new(ErrorKind::Custom, "validation_errors", message)
            .with_nested(self.errors)
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new(ErrorKind::Luhn, "payment_card_number_luhn", "bad");
        assert_eq!(error.kind, ErrorKind::Luhn);
        assert_eq!(error.code, "payment_card_number_luhn");
        assert_eq!(error.message, "bad");
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::length("mac_address_len", "too short")
            .with_param("required_length", "14")
            .with_param("actual", "3");

        assert_eq!(error.param("required_length"), Some("14"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn test_rendered_message_substitutes_params() {
        let error = ValidationError::new(
            ErrorKind::BrandLength,
            "payment_card_number_brand",
            "Length for a {brand} card must be {required_length}",
        )
        .with_param("brand", "Visa")
        .with_param("required_length", "13 or 16 or 19");

        assert_eq!(
            error.rendered_message(),
            "Length for a Visa card must be 13 or 16 or 19"
        );
        assert_eq!(
            error.to_string(),
            "payment_card_number_brand: Length for a Visa card must be 13 or 16 or 19"
        );
    }

    #[test]
    fn test_display_with_field() {
        let error = ValidationError::format("mac_address_format", "Unrecognized format")
            .with_field("device.mac");
        assert_eq!(
            error.to_string(),
            "[device.mac] mac_address_format: Unrecognized format"
        );
    }

    #[test]
    fn test_nested_and_flatten() {
        let error = ValidationError::custom("root").with_nested(vec![
            ValidationError::custom("child")
                .with_nested(vec![ValidationError::custom("grandchild")]),
            ValidationError::custom("sibling"),
        ]);

        assert!(error.has_nested());
        assert_eq!(error.total_error_count(), 4);
        assert_eq!(error.flatten().len(), 4);
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        assert!(errors.is_empty());
        errors.add(ValidationError::custom("first"));
        errors.add(ValidationError::custom("second"));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());

        let single = errors.into_single_error("two failures");
        assert_eq!(single.code, "validation_errors");
        assert_eq!(single.nested.len(), 2);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::digit_format("aba_routing_number", "not all digits");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_out_of_range_params() {
        let error = ValidationError::out_of_range("latitude_range", -90.0, 90.0, 91.5);
        assert_eq!(error.kind, ErrorKind::Range);
        assert_eq!(error.rendered_message(), "Value must be between -90 and 90");
        assert_eq!(error.param("actual"), Some("91.5"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json_value() {
        let error = ValidationError::length("isbn_length", "bad length").with_param("actual", "9");
        let value = error.to_json_value();
        assert_eq!(value["kind"], "length");
        assert_eq!(value["code"], "isbn_length");
        assert_eq!(value["params"]["actual"], "9");
    }
}
