//! Prelude module for convenient imports.
//!
//! Provides a single `use nebula_extra_types::prelude::*;` import that brings
//! in the traits, error types, value types, validators and combinators.
//!
//! # Examples
//!
//! ```
//! use nebula_extra_types::prelude::*;
//!
//! let mac = MacAddress::parse("00-00-5e-00-53-01").unwrap();
//! assert_eq!(mac.to_string(), "00:00:5e:00:53:01");
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{
    ErrorKind, ExtraType, Validate, ValidateExt, ValidationError, ValidationErrors,
};

// ============================================================================
// TYPES: Value types
// ============================================================================

pub use crate::types::{
    AbaRoutingNumber, CardBrand, CardOptions, Coordinate, DomainStr, Isbn, Latitude, Longitude,
    MacAddress, MongoObjectId, PaymentCardNumber, S3Path, SemanticVersion,
};

#[cfg(feature = "temporal")]
pub use crate::types::{EpochInteger, EpochNumber};

// ============================================================================
// VALIDATORS AND COMBINATORS
// ============================================================================

pub use crate::validators::{AsciiDigits, HexDigits, Parsed, ascii_digits, hex_digits};

pub use crate::combinators::{
    And, Not, Or, WithCode, WithMessage, and, not, or, with_code, with_message,
};

// ============================================================================
// REGISTRY
// ============================================================================

pub use crate::registry::RegistryError;
