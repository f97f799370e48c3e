//! Name-based dispatch over the value types.
//!
//! The table maps each type's [`ExtraType::NAME`] to a function that parses
//! raw text and returns the normalized form. It is built on first use and
//! never mutated afterwards.
//!
//! ```
//! use nebula_extra_types::registry;
//!
//! let mac = registry::normalize("mac_address", "0000.5e00.5301").unwrap();
//! assert_eq!(mac, "00:00:5e:00:53:01");
//!
//! assert!(registry::normalize("iban", "DE89370400440532013000").is_err());
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::foundation::{ExtraType, ValidationError};
use crate::types::{
    AbaRoutingNumber, Coordinate, DomainStr, Isbn, MacAddress, MongoObjectId, PaymentCardNumber,
    S3Path, SemanticVersion,
};

/// Parses raw text and returns the normalized form.
pub type Normalizer = fn(&str) -> Result<String, ValidationError>;

fn normalize_as<T: ExtraType>(raw: &str) -> Result<String, ValidationError> {
    T::parse(raw).map(|value| value.normalized())
}

fn entry<T: ExtraType>() -> (&'static str, Normalizer) {
    (T::NAME, normalize_as::<T>)
}

static REGISTRY: LazyLock<BTreeMap<&'static str, Normalizer>> = LazyLock::new(|| {
    let table: BTreeMap<_, _> = [
        entry::<PaymentCardNumber>(),
        entry::<Isbn>(),
        entry::<AbaRoutingNumber>(),
        entry::<MacAddress>(),
        entry::<Coordinate>(),
        entry::<DomainStr>(),
        entry::<S3Path>(),
        entry::<MongoObjectId>(),
        entry::<SemanticVersion>(),
    ]
    .into_iter()
    .collect();
    debug!(types = table.len(), "extra type registry initialized");
    table
});

// ============================================================================
// LOOKUP
// ============================================================================

/// Normalizes `raw` as the type registered under `type_name`.
pub fn normalize(type_name: &str, raw: &str) -> Result<String, RegistryError> {
    let normalizer = lookup(type_name)?;
    debug!(type_name, "normalizing value");
    normalizer(raw).map_err(|error| {
        trace!(type_name, code = %error.code, "value rejected");
        RegistryError::Invalid(error)
    })
}

/// Validates `raw` as the type registered under `type_name`.
pub fn validate(type_name: &str, raw: &str) -> Result<(), RegistryError> {
    normalize(type_name, raw).map(drop)
}

/// Returns the normalizer registered under `type_name`.
pub fn lookup(type_name: &str) -> Result<Normalizer, RegistryError> {
    REGISTRY.get(type_name).copied().ok_or_else(|| {
        debug!(type_name, "unknown extra type");
        RegistryError::UnknownType(type_name.to_owned())
    })
}

/// Returns true if a type is registered under `type_name`.
pub fn contains(type_name: &str) -> bool {
    REGISTRY.contains_key(type_name)
}

/// Registered type names in sorted order.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

// ============================================================================
// ERRORS
// ============================================================================

/// Errors returned by registry lookups.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// No type is registered under this name.
    #[error("No extra type registered as '{0}'")]
    UnknownType(String),

    /// The type was found but the value failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl RegistryError {
    /// The underlying validation error, if the lookup itself succeeded.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(error) => Some(error),
            Self::UnknownType(_) => None,
        }
    }
}
