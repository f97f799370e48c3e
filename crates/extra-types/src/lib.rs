//! # nebula-extra-types
//!
//! Validated value types for Nebula workflows: payment card numbers, ISBNs,
//! ABA routing numbers, MAC addresses and a handful of smaller formats.
//! Every type parses raw text once, fails fast with a structured
//! [`ValidationError`](foundation::ValidationError), and keeps a normalized
//! form afterwards.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_extra_types::prelude::*;
//!
//! let card: PaymentCardNumber = "4242424242424242".parse().unwrap();
//! assert_eq!(card.brand(), CardBrand::Visa);
//! assert_eq!(card.masked(), "424242******4242");
//!
//! let isbn: Isbn = "080442957X".parse().unwrap();
//! assert_eq!(isbn.as_str(), "9780804429573");
//!
//! let err = "4000000000000000".parse::<PaymentCardNumber>().unwrap_err();
//! assert_eq!(err.kind, ErrorKind::Luhn);
//! ```
//!
//! ## Composing checks
//!
//! Value types join combinator chains through
//! [`Parsed`](validators::Parsed):
//!
//! ```
//! use nebula_extra_types::prelude::*;
//!
//! let identifier = Parsed::<Isbn>::new().or(Parsed::<MongoObjectId>::new());
//! assert!(identifier.validate("5f9f2f4b9d3c5a7b4c7e6c1d").is_ok());
//! ```
//!
//! ## Modules
//!
//! - [`checksum`]: Luhn, ISBN and ABA check-digit arithmetic
//! - [`types`]: the value types
//! - [`registry`]: dispatch by type name
//! - [`combinators`] and [`validators`]: composition over `str`
//!
//! Use the [`validator!`] macro for new zero-boilerplate validators.

// ValidationError is the fundamental error type for every constructor;
// boxing it would add indirection to every parse for no practical benefit.
#![allow(clippy::result_large_err)]
// Deep combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex types.
#![allow(clippy::type_complexity)]

pub mod checksum;
pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod types;
pub mod validators;
