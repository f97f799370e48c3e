//! OR combinator - logical disjunction of validators

use crate::foundation::{ErrorKind, Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// At least one validator must pass. When both fail, the resulting error
/// carries both failures as nested errors.
///
/// # Examples
///
/// ```
/// use nebula_extra_types::foundation::{Validate, ValidateExt};
/// use nebula_extra_types::types::{Isbn, MongoObjectId};
/// use nebula_extra_types::validators::Parsed;
///
/// let identifier = Parsed::<Isbn>::new().or(Parsed::<MongoObjectId>::new());
/// assert!(identifier.validate("080442957X").is_ok());
/// assert!(identifier.validate("5f9f2f4b9d3c5a7b4c7e6c1d").is_ok());
/// assert!(identifier.validate("neither").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
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
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => Err(ValidationError::new(
                    ErrorKind::Custom,
                    "or_failed",
                    "All alternatives failed",
                )
                .with_nested(vec![left_error, right_error])),
            },
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Isbn, MacAddress};
    use crate::validators::Parsed;

    #[test]
    fn test_or_left_passes() {
        let validator = or(Parsed::<Isbn>::new(), Parsed::<MacAddress>::new());
        assert!(validator.validate("9780804429573").is_ok());
    }

    #[test]
    fn test_or_right_passes() {
        let validator = or(Parsed::<Isbn>::new(), Parsed::<MacAddress>::new());
        assert!(validator.validate("00:00:5e:00:53:01").is_ok());
    }

    #[test]
    fn test_or_both_fail_nests_errors() {
        let validator = or(Parsed::<Isbn>::new(), Parsed::<MacAddress>::new());
        let err = validator.validate("short").unwrap_err();
        assert_eq!(err.code, "or_failed");
        assert_eq!(err.nested.len(), 2);
        assert_eq!(err.nested[0].code, "isbn_length");
        assert_eq!(err.nested[1].code, "mac_address_len");
    }
}
