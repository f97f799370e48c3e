//! Integration tests for nebula-extra-types.

mod combinators;
mod properties;
mod registry;
mod scenarios;
#[cfg(feature = "serde")]
mod serde_support;
