//! AND combinator - logical conjunction of validators
//!
//! # Examples
//!
//! ```
//! use nebula_extra_types::combinators::And;
//! use nebula_extra_types::foundation::Validate;
//! use nebula_extra_types::types::AbaRoutingNumber;
//! use nebula_extra_types::validators::{Parsed, ascii_digits};
//!
//! let validator = And::new(ascii_digits(), Parsed::<AbaRoutingNumber>::new());
//! assert!(validator.validate("122105155").is_ok());
//! assert!(validator.validate("12210515x").is_err());
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Both validators must pass. The error of the first failing validator is
/// returned unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ErrorKind, ValidateExt};
    use crate::types::{AbaRoutingNumber, PaymentCardNumber};
    use crate::validators::{Parsed, ascii_digits};

    #[test]
    fn test_and_both_pass() {
        let validator = and(ascii_digits(), Parsed::<PaymentCardNumber>::new());
        assert!(validator.validate("4242424242424242").is_ok());
    }

    #[test]
    fn test_and_short_circuits_on_left() {
        let validator = ascii_digits().and(Parsed::<AbaRoutingNumber>::new());
        let err = validator.validate("12-105155").unwrap_err();
        assert_eq!(err.code, "ascii_digits");
    }

    #[test]
    fn test_and_reports_right_failure() {
        let validator = ascii_digits().and(Parsed::<AbaRoutingNumber>::new());
        let err = validator.validate("122105154").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Checksum);
    }

    #[test]
    fn test_into_parts() {
        let (left, _right) = And::new(ascii_digits(), ascii_digits()).into_parts();
        assert!(left.validate("0").is_ok());
    }
}
