//! Built-in validators
//!
//! - **Adapters**: [`Parsed`] turns any value type into a [`Validate`]
//!   over `str`
//! - **Character classes**: [`ascii_digits`], [`hex_digits`]
//!
//! # Examples
//!
//! ```
//! use nebula_extra_types::foundation::{Validate, ValidateExt};
//! use nebula_extra_types::types::AbaRoutingNumber;
//! use nebula_extra_types::validators::{Parsed, ascii_digits};
//!
//! let routing = ascii_digits().and(Parsed::<AbaRoutingNumber>::new());
//! assert!(routing.validate("122105155").is_ok());
//! ```
//!
//! [`Validate`]: crate::foundation::Validate

pub mod charset;
pub mod parsed;

pub use charset::{AsciiDigits, HexDigits, ascii_digits, hex_digits};
pub use parsed::Parsed;
