//! Core validation types and traits
//!
//! This module contains the fundamental building blocks shared by every
//! value type and validator in the crate:
//!
//! - **Traits**: [`Validate`], [`ValidateExt`], [`ExtraType`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ErrorKind`]
//!
//! # Examples
//!
//! ```
//! use nebula_extra_types::foundation::{ErrorKind, ExtraType};
//! use nebula_extra_types::types::AbaRoutingNumber;
//!
//! let routing = AbaRoutingNumber::parse("122105155").unwrap();
//! assert_eq!(routing.as_str(), "122105155");
//!
//! let err = AbaRoutingNumber::parse("122105154").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Checksum);
//! ```

pub mod error;
pub mod traits;

pub use error::{ErrorKind, Params, ValidationError, ValidationErrors};
pub use traits::{ExtraType, Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with multiple validators; every failure is collected.
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let errors: ValidationErrors = validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect();

    if errors.has_errors() {
        Err(errors)
    } else {
        Ok(())
    }
}

/// Validates a value with multiple validators (at least one must pass).
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
