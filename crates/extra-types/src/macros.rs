//! Macros for creating validators with minimal boilerplate.
//!
//! - [`validator!`]: Create a complete validator (struct + Validate impl + factory fn)
//! - [`compose!`]: AND-chain multiple validators
//! - [`any_of!`]: OR-chain multiple validators
//!
//! # Examples
//!
//! ```
//! use nebula_extra_types::validator;
//! use nebula_extra_types::foundation::{Validate, ValidationError};
//!
//! validator! {
//!     pub NotBlank for str;
//!     rule(input) { !input.trim().is_empty() }
//!     error(input) { ValidationError::format("not_blank", "must not be blank") }
//!     fn not_blank();
//! }
//!
//! assert!(not_blank().validate("x").is_ok());
//! assert!(not_blank().validate("  ").is_err());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a unit validator: struct definition, `Validate` implementation and
/// an optional `const` factory function.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]` is always applied.
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

// ============================================================================
// COMPOSE MACRO
// ============================================================================

/// Composes multiple validators using AND logic.
///
/// ```rust,ignore
/// let validator = compose![ascii_digits(), Parsed::<AbaRoutingNumber>::new()];
/// ```
#[macro_export]
macro_rules! compose {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.and($rest))+
    };
}

// ============================================================================
// ANY_OF MACRO
// ============================================================================

/// Composes multiple validators using OR logic.
///
/// ```rust,ignore
/// let identifier = any_of![Parsed::<Isbn>::new(), Parsed::<MongoObjectId>::new()];
/// ```
#[macro_export]
macro_rules! any_of {
    ($first:expr) => {
        $first
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.or($rest))+
    };
}

// ============================================================================
// TESTS
// ============================================================================
