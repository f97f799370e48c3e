//! Validated value types.
//!
//! Each type is parsed once from raw text through [`ExtraType::parse`]
//! (also reachable through `FromStr` and `TryFrom`) and is immutable
//! afterwards. Parsing is strict: surrounding whitespace is an error unless
//! the type says otherwise.
//!
//! - **Checksummed identifiers**: [`PaymentCardNumber`], [`Isbn`],
//!   [`AbaRoutingNumber`]
//! - **Network**: [`MacAddress`], [`DomainStr`], [`S3Path`]
//! - **Geography**: [`Latitude`], [`Longitude`], [`Coordinate`]
//! - **Identifiers and versions**: [`MongoObjectId`], [`SemanticVersion`]
//! - **Time** (feature `temporal`): [`EpochNumber`], [`EpochInteger`]
//!
//! [`ExtraType::parse`]: crate::foundation::ExtraType::parse

pub mod coordinate;
pub mod domain;
#[cfg(feature = "temporal")]
pub mod epoch;
pub mod isbn;
pub mod mac_address;
pub mod object_id;
pub mod payment;
pub mod routing_number;
pub mod s3;
pub mod semantic_version;

pub use coordinate::{Coordinate, Latitude, Longitude};
pub use domain::DomainStr;
#[cfg(feature = "temporal")]
pub use epoch::{EpochInteger, EpochNumber};
pub use isbn::Isbn;
pub use mac_address::MacAddress;
pub use object_id::MongoObjectId;
pub use payment::{CardBrand, CardOptions, Classification, PaymentCardNumber, classify};
pub use routing_number::AbaRoutingNumber;
pub use s3::S3Path;
pub use semantic_version::SemanticVersion;
