//! Adapter from value types to [`Validate`].

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{ExtraType, Validate, ValidationError};

/// Validates text by parsing it as `T` and discarding the value.
///
/// This is how value types take part in combinator chains.
///
/// # Examples
///
/// ```
/// use nebula_extra_types::foundation::{Validate, ValidateExt};
/// use nebula_extra_types::types::{Isbn, MacAddress};
/// use nebula_extra_types::validators::Parsed;
///
/// let isbn = Parsed::<Isbn>::new();
/// assert!(isbn.validate("080442957X").is_ok());
///
/// let isbn_or_mac = isbn.or(Parsed::<MacAddress>::new());
/// assert!(isbn_or_mac.validate("00:00:5e:00:53:01").is_ok());
/// ```
pub struct Parsed<T> {
    strip_whitespace: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Parsed<T> {
    /// Strict adapter: the raw text is parsed as given.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strip_whitespace: false,
            _marker: PhantomData,
        }
    }

    /// Trim surrounding whitespace before parsing.
    #[must_use = "builder methods must be chained or built"]
    pub const fn strip_whitespace(mut self) -> Self {
        self.strip_whitespace = true;
        self
    }
}

impl<T: ExtraType> Parsed<T> {
    /// Parses and returns the value instead of discarding it.
    pub fn parse(&self, input: &str) -> Result<T, ValidationError> {
        let input = if self.strip_whitespace {
            input.trim()
        } else {
            input
        };
        T::parse(input)
    }
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Parsed<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Parsed<T> {}

impl<T> fmt::Debug for Parsed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parsed")
            .field("type", &std::any::type_name::<T>())
            .field("strip_whitespace", &self.strip_whitespace)
            .finish()
    }
}

impl<T: ExtraType> Validate for Parsed<T> {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.parse(input).map(drop)
    }
}
