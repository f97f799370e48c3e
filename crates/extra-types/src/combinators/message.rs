//! MESSAGE combinator - custom error messages and codes

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Relabels the error of a validator with a workflow's own message or code.
///
/// The relabelled error keeps the original kind, field and params, so a
/// replacement message can use the same placeholders as the original
/// template (`{brand}`, `{required_length}`). The original error is nested
/// underneath.
///
/// # Examples
///
/// ```
/// use nebula_extra_types::combinators::WithMessage;
/// use nebula_extra_types::foundation::{ErrorKind, Validate};
/// use nebula_extra_types::types::PaymentCardNumber;
/// use nebula_extra_types::validators::Parsed;
///
/// let card = WithMessage::new(Parsed::<PaymentCardNumber>::new(), "Please check the number");
/// let err = card.validate("4000000000000000").unwrap_err();
/// assert_eq!(err.message, "Please check the number");
/// assert_eq!(err.kind, ErrorKind::Luhn);
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Option<Cow<'static, str>>,
    code: Option<Cow<'static, str>>,
}

impl<V> WithMessage<V> {
    /// Replaces the message template.
    pub fn new(inner: V, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: Some(message.into()),
            code: None,
        }
    }

    /// Replaces only the code; the original message is kept.
    pub fn code_only(inner: V, code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            message: None,
            code: Some(code.into()),
        }
    }

    /// Also replaces the code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let code = self.code.clone().unwrap_or_else(|| original.code.clone());
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| original.message.clone());

            let mut relabelled = ValidationError::new(original.kind, code, message);
            relabelled.field.clone_from(&original.field);
            relabelled.params.clone_from(&original.params);
            relabelled.with_nested_error(original)
        })
    }
}

/// Replaces the message template of `validator`'s errors.
pub fn with_message<V>(validator: V, message: impl Into<Cow<'static, str>>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

/// [`WithMessage`] built by [`with_code`]: a host-specific code over the
/// crate's message.
pub type WithCode<V> = WithMessage<V>;

/// Replaces the code of `validator`'s errors, e.g. mapping
/// `aba_routing_number` onto a host application's `ERR_ROUTING`.
pub fn with_code<V>(validator: V, code: impl Into<Cow<'static, str>>) -> WithCode<V> {
    WithMessage::code_only(validator, code)
}

// ============================================================================
// TESTS
// ============================================================================
