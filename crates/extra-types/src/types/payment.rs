//! Payment card numbers.
//!
//! A [`PaymentCardNumber`] is an all-digit string of 12 to 19 characters
//! that passes the Luhn check and whose length is one of the lengths its
//! brand issues. The brand is derived from the issuer identification
//! prefix by [`classify`].

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::checksum::{is_ascii_digits, luhn_valid};
use crate::foundation::{ErrorKind, ExtraType, ValidationError};

/// Accepted total lengths for any card number, regardless of brand.
pub const CARD_LENGTH: RangeInclusive<usize> = 12..=19;

// ============================================================================
// CARD BRAND
// ============================================================================

/// Card brands recognised by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Mir,
    Discover,
    Maestro,
    Verve,
    Dankort,
    Troy,
    UnionPay,
    Jcb,
    DinersClub,
    /// No rule matched; any length in [`CARD_LENGTH`] is accepted.
    Other,
}

impl CardBrand {
    /// Display name of the brand.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Mir => "Mir",
            Self::Discover => "Discover",
            Self::Maestro => "Maestro",
            Self::Verve => "Verve",
            Self::Dankort => "Dankort",
            Self::Troy => "Troy",
            Self::UnionPay => "UnionPay",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::Other => "other",
        }
    }

    /// Total lengths this brand issues. Empty for [`CardBrand::Other`].
    #[must_use]
    pub const fn allowed_lengths(self) -> &'static [usize] {
        match self {
            Self::Visa => &[13, 16, 19],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::Mir => &[16, 17, 18, 19],
            Self::Maestro => &[12, 13, 14, 15, 16, 17, 18, 19],
            Self::Discover => &[16, 17, 18, 19],
            Self::Verve => &[16, 18, 19],
            Self::Dankort => &[16],
            Self::Troy => &[16],
            Self::UnionPay => &[16, 19],
            Self::Jcb => &[16, 19],
            Self::DinersClub => &[14, 15, 16, 17, 18, 19],
            Self::Other => &[],
        }
    }

    /// Returns true if a card of this brand may have `len` digits.
    #[must_use]
    pub fn accepts_length(self, len: usize) -> bool {
        self == Self::Other || self.allowed_lengths().contains(&len)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Brand plus the lengths it accepts, as produced by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub brand: CardBrand,
    pub allowed_lengths: &'static [usize],
}

impl From<CardBrand> for Classification {
    fn from(brand: CardBrand) -> Self {
        Self {
            brand,
            allowed_lengths: brand.allowed_lengths(),
        }
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Integer value of the first `width` digits, or `None` if `digits` is shorter.
fn prefix_value(digits: &str, width: usize) -> Option<u32> {
    digits.get(..width)?.parse().ok()
}

fn prefix_in(digits: &str, width: usize, range: RangeInclusive<u32>) -> bool {
    prefix_value(digits, width).is_some_and(|p| range.contains(&p))
}

fn prefix_one_of(digits: &str, width: usize, set: &[&str]) -> bool {
    digits.get(..width).is_some_and(|p| set.contains(&p))
}

/// Classifies a digit string by its issuer prefix.
///
/// Rules are evaluated in a fixed order and the first match wins; several
/// prefix ranges overlap, so the order is part of the contract. Length is
/// not consulted here. Prefix rules never match when the string is shorter
/// than the prefix they inspect.
///
/// ```
/// use nebula_extra_types::types::payment::{CardBrand, classify};
///
/// assert_eq!(classify("4242424242424242").brand, CardBrand::Visa);
/// assert_eq!(classify("2200000000000000").brand, CardBrand::Mir);
/// assert_eq!(classify("1234").brand, CardBrand::Other);
/// ```
pub fn classify(digits: &str) -> Classification {
    let brand = if digits.starts_with('4') {
        CardBrand::Visa
    } else if prefix_in(digits, 2, 51..=55) || prefix_in(digits, 4, 2221..=2720) {
        CardBrand::Mastercard
    } else if prefix_one_of(digits, 2, &["34", "37"]) {
        CardBrand::Amex
    } else if prefix_in(digits, 4, 2200..=2204) {
        CardBrand::Mir
    } else if prefix_one_of(
        digits,
        4,
        &["5018", "5020", "5038", "5893", "6304", "6759", "6761", "6762", "6763"],
    ) || prefix_one_of(digits, 6, &["676770", "676774"])
    {
        CardBrand::Maestro
    } else if digits.starts_with("65")
        || prefix_in(digits, 3, 644..=649)
        || digits.starts_with("6011")
    {
        CardBrand::Discover
    } else if prefix_in(digits, 6, 506_099..=506_198)
        || prefix_in(digits, 6, 650_002..=650_027)
        || prefix_in(digits, 6, 507_865..=507_964)
    {
        CardBrand::Verve
    } else if prefix_one_of(digits, 4, &["5019", "4571"]) {
        CardBrand::Dankort
    } else if digits.starts_with("9792") {
        CardBrand::Troy
    } else if prefix_one_of(digits, 2, &["62", "81"]) {
        CardBrand::UnionPay
    } else if prefix_in(digits, 4, 3528..=3589) {
        CardBrand::Jcb
    } else if prefix_one_of(digits, 2, &["30", "36", "38", "39"]) {
        CardBrand::DinersClub
    } else if digits.starts_with("55") {
        // Shadowed by the Mastercard 51..=55 range.
        return Classification {
            brand: CardBrand::DinersClub,
            allowed_lengths: &[16],
        };
    } else {
        CardBrand::Other
    };

    brand.into()
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Input clean-up applied before a card number is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardOptions {
    /// Trim leading and trailing whitespace.
    pub strip_whitespace: bool,
    /// Drop spaces and hyphens between digit groups (`4242 4242 ...`).
    pub allow_separators: bool,
}

impl CardOptions {
    /// Strict options: the input must already be bare digits.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Lenient options: trim and accept space / hyphen grouping.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strip_whitespace: true,
            allow_separators: true,
        }
    }

    /// Trim surrounding whitespace.
    #[must_use = "builder methods must be chained or built"]
    pub fn strip_whitespace(mut self) -> Self {
        self.strip_whitespace = true;
        self
    }

    /// Accept spaces and hyphens between digit groups.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow_separators(mut self) -> Self {
        self.allow_separators = true;
        self
    }

    fn clean(self, raw: &str) -> String {
        let raw = if self.strip_whitespace { raw.trim() } else { raw };
        if self.allow_separators {
            raw.chars().filter(|c| *c != ' ' && *c != '-').collect()
        } else {
            raw.to_owned()
        }
    }
}

// ============================================================================
// PAYMENT CARD NUMBER
// ============================================================================

/// A validated payment card number.
///
/// # Examples
///
/// ```
/// use nebula_extra_types::types::{CardBrand, PaymentCardNumber};
///
/// let card: PaymentCardNumber = "4242424242424242".parse().unwrap();
/// assert_eq!(card.brand(), CardBrand::Visa);
/// assert_eq!(card.bin(), "424242");
/// assert_eq!(card.last4(), "4242");
/// assert_eq!(card.masked(), "424242******4242");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct PaymentCardNumber {
    number: String,
    brand: CardBrand,
}

impl PaymentCardNumber {
    /// Validates `raw` after applying `options`.
    pub fn parse_with(raw: &str, options: &CardOptions) -> Result<Self, ValidationError> {
        Self::from_digits(options.clean(raw))
    }

    fn from_digits(number: String) -> Result<Self, ValidationError> {
        if !is_ascii_digits(&number) {
            return Err(ValidationError::digit_format(
                "payment_card_number_digits",
                "Card number is not all digits",
            ));
        }

        if !CARD_LENGTH.contains(&number.len()) {
            return Err(ValidationError::length(
                "payment_card_number_length",
                "Card number must have between {min} and {max} digits",
            )
            .with_param("min", CARD_LENGTH.start().to_string())
            .with_param("max", CARD_LENGTH.end().to_string())
            .with_param("actual", number.len().to_string()));
        }

        if !luhn_valid(&number) {
            return Err(ValidationError::new(
                ErrorKind::Luhn,
                "payment_card_number_luhn",
                "Card number is not luhn valid",
            ));
        }

        let Classification {
            brand,
            allowed_lengths,
        } = classify(&number);
        if brand != CardBrand::Other && !allowed_lengths.contains(&number.len()) {
            let required = allowed_lengths
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(" or ");
            return Err(ValidationError::new(
                ErrorKind::BrandLength,
                "payment_card_number_brand",
                "Length for a {brand} card must be {required_length}",
            )
            .with_param("brand", brand.name())
            .with_param("required_length", required));
        }

        Ok(Self { number, brand })
    }

    /// The full card number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.number
    }

    /// Issuer identification number: the first six digits.
    #[must_use]
    pub fn bin(&self) -> &str {
        &self.number[..6]
    }

    /// The last four digits.
    #[must_use]
    pub fn last4(&self) -> &str {
        &self.number[self.number.len() - 4..]
    }

    /// Classified brand.
    #[must_use]
    pub fn brand(&self) -> CardBrand {
        self.brand
    }

    /// Number with everything between the BIN and the last four digits masked.
    #[must_use]
    pub fn masked(&self) -> String {
        let hidden = self.number.len() - 10;
        format!("{}{}{}", self.bin(), "*".repeat(hidden), self.last4())
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.number.len()
    }

    /// Returns true if the number has no digits (never, once validated).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.number.is_empty()
    }
}

impl ExtraType for PaymentCardNumber {
    const NAME: &'static str = "payment_card_number";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::from_digits(raw.to_owned())
    }

    fn normalized(&self) -> String {
        self.number.clone()
    }
}

impl FromStr for PaymentCardNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ExtraType>::parse(s)
    }
}

impl TryFrom<String> for PaymentCardNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_digits(value)
    }
}

impl TryFrom<&str> for PaymentCardNumber {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaymentCardNumber> for String {
    fn from(value: PaymentCardNumber) -> Self {
        value.number
    }
}

impl AsRef<str> for PaymentCardNumber {
    fn as_ref(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for PaymentCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number)
    }
}

// ============================================================================
// TESTS
// ============================================================================
