//! MAC addresses in colon, hyphen or dot notation.
//!
//! Supported notations:
//! - Colon-separated: `00:00:5e:00:53:01`
//! - Hyphen-separated: `00-00-5e-00-53-01`
//! - Dot-separated (Cisco): `0000.5e00.5301`
//!
//! 6, 8 and 20 byte addresses are accepted (EUI-48, EUI-64 and the
//! 20-byte InfiniBand hardware address). The normalized form is always
//! lower-case and colon-joined.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::foundation::{ExtraType, ValidationError};

/// Shortest raw input that can possibly hold a six byte address.
pub const MIN_RAW_LENGTH: usize = 14;

/// Byte counts a MAC address may have.
pub const ALLOWED_OCTET_COUNTS: [usize; 3] = [6, 8, 20];

// ============================================================================
// NOTATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notation {
    Colon,
    Hyphen,
    Dot,
}

impl Notation {
    /// First separator found among colon, hyphen, dot.
    fn detect(raw: &str) -> Option<Self> {
        if raw.contains(':') {
            Some(Self::Colon)
        } else if raw.contains('-') {
            Some(Self::Hyphen)
        } else if raw.contains('.') {
            Some(Self::Dot)
        } else {
            None
        }
    }

    const fn separator(self) -> char {
        match self {
            Self::Colon => ':',
            Self::Hyphen => '-',
            Self::Dot => '.',
        }
    }

    /// Hex characters per segment.
    const fn segment_width(self) -> usize {
        match self {
            Self::Colon | Self::Hyphen => 2,
            Self::Dot => 4,
        }
    }

    const fn template(self) -> &'static str {
        match self {
            Self::Colon => "Must have the format xx:xx:xx:xx:xx:xx",
            Self::Hyphen => "Must have the format xx-xx-xx-xx-xx-xx",
            Self::Dot => "Must have the format xxxx.xxxx.xxxx",
        }
    }
}

fn length_error(raw: &str, required: &'static str) -> ValidationError {
    ValidationError::length(
        "mac_address_len",
        "Length for a {mac_address} MAC address must be {required_length}",
    )
    .with_param("mac_address", raw.to_owned())
    .with_param("required_length", required)
}

fn unrecognized_format() -> ValidationError {
    ValidationError::format("mac_address_format", "Unrecognized format")
}

// ============================================================================
// MAC ADDRESS
// ============================================================================

/// A parsed MAC address.
///
/// # Examples
///
/// ```
/// use nebula_extra_types::types::MacAddress;
///
/// let mac: MacAddress = "0000.5E00.5301".parse().unwrap();
/// assert_eq!(mac.as_str(), "00:00:5e:00:53:01");
/// assert_eq!(mac.octets(), &[0x00, 0x00, 0x5e, 0x00, 0x53, 0x01]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct MacAddress {
    octets: SmallVec<[u8; 8]>,
    normalized: String,
}

impl MacAddress {
    fn parse_octets(raw: &str) -> Result<SmallVec<[u8; 8]>, ValidationError> {
        if raw.chars().count() < MIN_RAW_LENGTH {
            return Err(length_error(raw, "14"));
        }

        let notation = Notation::detect(raw).ok_or_else(unrecognized_format)?;
        let width = notation.segment_width();
        let segments: SmallVec<[&str; 20]> = raw.split(notation.separator()).collect();

        if segments.iter().any(|s| s.len() != width) {
            return Err(ValidationError::format("mac_address_format", notation.template()));
        }

        let count = segments.len() * width / 2;
        if !ALLOWED_OCTET_COUNTS.contains(&count) {
            return Err(length_error(raw, "6, 8 or 20"));
        }

        let mut octets = SmallVec::with_capacity(count);
        for segment in segments {
            if !segment.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(unrecognized_format());
            }
            for i in (0..width).step_by(2) {
                let byte = u8::from_str_radix(&segment[i..i + 2], 16)
                    .map_err(|_| unrecognized_format())?;
                octets.push(byte);
            }
        }

        Ok(octets)
    }

    fn from_octets(octets: SmallVec<[u8; 8]>) -> Self {
        let normalized = octets
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(":");
        Self { octets, normalized }
    }

    /// Lower-case, colon-joined form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Raw bytes in transmission order.
    #[must_use]
    pub fn octets(&self) -> &[u8] {
        &self.octets
    }

    /// Number of bytes: 6, 8 or 20.
    #[must_use]
    pub fn octet_count(&self) -> usize {
        self.octets.len()
    }
}

impl ExtraType for MacAddress {
    const NAME: &'static str = "mac_address";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::parse_octets(raw).map(Self::from_octets)
    }

    fn normalized(&self) -> String {
        self.normalized.clone()
    }
}

impl FromStr for MacAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ExtraType>::parse(s)
    }
}

impl TryFrom<String> for MacAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for MacAddress {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MacAddress> for String {
    fn from(value: MacAddress) -> Self {
        value.normalized
    }
}

impl AsRef<str> for MacAddress {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

// ============================================================================
// TESTS
// ============================================================================
