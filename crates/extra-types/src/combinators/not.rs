//! NOT combinator - logical negation of validators

use crate::foundation::{ErrorKind, Validate, ValidationError};

/// Inverts a validator: succeeds when the inner validator fails and vice versa.
///
/// # Examples
///
/// ```
/// use nebula_extra_types::combinators::Not;
/// use nebula_extra_types::foundation::Validate;
/// use nebula_extra_types::validators::ascii_digits;
///
/// let not_numeric = Not::new(ascii_digits());
/// assert!(not_numeric.validate("bucket-name").is_ok());
/// assert!(not_numeric.validate("12345").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                ErrorKind::Custom,
                "not_failed",
                "Validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}
