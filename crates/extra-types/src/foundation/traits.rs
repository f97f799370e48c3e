//! Core traits for the validation system
//!
//! [`Validate`] is the check-only contract every validator implements;
//! [`ExtraType`] is the parse-once contract every value type implements.

use std::borrow::Cow;

use crate::combinators::{And, Not, Or, WithMessage};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// # Examples
///
/// ```
/// use nebula_extra_types::foundation::{Validate, ValidationError};
///
/// struct Nine;
///
/// impl Validate for Nine {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.len() == 9 {
///             Ok(())
///         } else {
///             Err(ValidationError::length("nine", "must be 9 characters"))
///         }
///     }
/// }
///
/// assert!(Nine.validate("122105155").is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`].
pub trait ValidateExt: Validate + Sized {
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one validator must pass. Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Succeeds exactly when `self` fails.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }

    /// Replaces the error message, keeping the original as a nested error.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}

// ============================================================================
// EXTRA TYPE TRAIT
// ============================================================================

/// A value type constructed once from raw text and immutable afterwards.
///
/// Construction either yields a fully validated value or the first
/// violated invariant; there are no partial values.
pub trait ExtraType: Sized {
    /// Registry name of the type, also used as the error code prefix.
    const NAME: &'static str;

    /// Validates `raw` and builds the normalized value.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// Canonical text form of the value.
    fn normalized(&self) -> String;
}

// ============================================================================
// TESTS
// ============================================================================
