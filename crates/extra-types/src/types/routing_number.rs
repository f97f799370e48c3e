//! ABA routing transit numbers.

use std::fmt;
use std::str::FromStr;

use crate::checksum::{aba_checksum_valid, is_ascii_digits};
use crate::foundation::{ErrorKind, ExtraType, ValidationError};

/// Number of digits in a routing number.
pub const ROUTING_NUMBER_LENGTH: usize = 9;

/// A validated nine-digit ABA routing transit number.
///
/// ```
/// use nebula_extra_types::types::AbaRoutingNumber;
///
/// let aba: AbaRoutingNumber = "122105155".parse().unwrap();
/// assert_eq!(aba.federal_reserve_routing_symbol(), "1221");
/// assert_eq!(aba.aba_institution_identifier(), "0515");
/// assert_eq!(aba.check_digit(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct AbaRoutingNumber(String);

impl AbaRoutingNumber {
    fn validate(raw: &str) -> Result<(), ValidationError> {
        if raw.len() != ROUTING_NUMBER_LENGTH || !is_ascii_digits(raw) {
            return Err(ValidationError::digit_format(
                "aba_routing_number",
                "routing number is not all digits",
            )
            .with_param("required_length", ROUTING_NUMBER_LENGTH.to_string()));
        }

        if !aba_checksum_valid(raw) {
            return Err(ValidationError::new(
                ErrorKind::Checksum,
                "aba_routing_number",
                "Incorrect ABA routing transit number",
            ));
        }

        Ok(())
    }

    /// All nine digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Federal Reserve routing symbol: the first four digits.
    #[must_use]
    pub fn federal_reserve_routing_symbol(&self) -> &str {
        &self.0[..4]
    }

    /// ABA institution identifier: digits five through eight.
    #[must_use]
    pub fn aba_institution_identifier(&self) -> &str {
        &self.0[4..8]
    }

    /// The trailing check digit.
    #[must_use]
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[8] - b'0'
    }
}

impl ExtraType for AbaRoutingNumber {
    const NAME: &'static str = "aba_routing_number";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::validate(raw)?;
        Ok(Self(raw.to_owned()))
    }

    fn normalized(&self) -> String {
        self.0.clone()
    }
}

impl FromStr for AbaRoutingNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ExtraType>::parse(s)
    }
}

impl TryFrom<String> for AbaRoutingNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::validate(&value)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for AbaRoutingNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AbaRoutingNumber> for String {
    fn from(value: AbaRoutingNumber) -> Self {
        value.0
    }
}

impl AsRef<str> for AbaRoutingNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbaRoutingNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
