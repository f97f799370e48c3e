//! MongoDB `ObjectId` values.

use std::fmt;
use std::str::FromStr;

use crate::foundation::{ExtraType, Validate, ValidationError};
use crate::validators::hex_digits;

/// Length of the hex text form.
pub const OBJECT_ID_LENGTH: usize = 24;

/// A 12-byte MongoDB object id, kept as lower-case hex.
///
/// The first four bytes are the creation time in seconds since the Unix
/// epoch, big-endian.
///
/// ```
/// use nebula_extra_types::types::MongoObjectId;
///
/// let id: MongoObjectId = "5F9F2F4B9D3C5A7B4C7E6C1D".parse().unwrap();
/// assert_eq!(id.as_str(), "5f9f2f4b9d3c5a7b4c7e6c1d");
/// assert_eq!(id.timestamp(), 0x5f9f_2f4b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct MongoObjectId {
    hex: String,
    bytes: [u8; 12],
}

impl MongoObjectId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// The twelve raw bytes.
    #[must_use]
    pub const fn bytes(&self) -> &[u8; 12] {
        &self.bytes
    }

    /// Creation time in seconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]])
    }

    /// Creation time as a UTC datetime.
    #[cfg(feature = "temporal")]
    #[must_use]
    pub fn generation_time(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(i64::from(self.timestamp()), 0)
    }
}

impl ExtraType for MongoObjectId {
    const NAME: &'static str = "mongo_object_id";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        let length = raw.chars().count();
        if length != OBJECT_ID_LENGTH {
            return Err(ValidationError::length(
                "object_id_length",
                "Invalid ObjectId has to be {required_length} characters long, not {actual}",
            )
            .with_param("required_length", OBJECT_ID_LENGTH.to_string())
            .with_param("actual", length.to_string()));
        }

        let format_error = || {
            ValidationError::format(
                "object_id_format",
                "Invalid ObjectId has to be in the format '5f9f2f4b9d3c5a7b4c7e6c1d'",
            )
        };

        hex_digits()
            .validate(raw)
            .map_err(|e| format_error().with_nested_error(e))?;

        let hex = raw.to_ascii_lowercase();
        let mut bytes = [0u8; 12];
        for (byte, pair) in bytes.iter_mut().zip(hex.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| format_error())?;
            *byte = u8::from_str_radix(pair, 16).map_err(|_| format_error())?;
        }

        Ok(Self { hex, bytes })
    }

    fn normalized(&self) -> String {
        self.hex.clone()
    }
}

impl FromStr for MongoObjectId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ExtraType>::parse(s)
    }
}

impl TryFrom<String> for MongoObjectId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for MongoObjectId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MongoObjectId> for String {
    fn from(value: MongoObjectId) -> Self {
        value.hex
    }
}

impl AsRef<str> for MongoObjectId {
    fn as_ref(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for MongoObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
