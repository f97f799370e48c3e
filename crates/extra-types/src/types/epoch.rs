//! Unix epoch timestamps converted to UTC datetimes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::foundation::{ExtraType, ValidationError};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

fn out_of_range<T: fmt::Display>(actual: T, min: T, max: T) -> ValidationError {
    ValidationError::out_of_range("epoch_range", min, max, actual)
}

fn representable_seconds() -> (i64, i64) {
    (
        DateTime::<Utc>::MIN_UTC.timestamp(),
        DateTime::<Utc>::MAX_UTC.timestamp(),
    )
}

// ============================================================================
// EPOCH NUMBER
// ============================================================================

/// A timestamp given as fractional seconds since the Unix epoch.
///
/// ```
/// use nebula_extra_types::types::EpochNumber;
///
/// let t = EpochNumber::new(1.5).unwrap();
/// assert_eq!(t.datetime().timestamp_millis(), 1_500);
/// assert_eq!(t.timestamp(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct EpochNumber(DateTime<Utc>);

impl EpochNumber {
    /// Converts `seconds` to a datetime. Non-finite or unrepresentable
    /// values fail with `epoch_range`.
    pub fn new(seconds: f64) -> Result<Self, ValidationError> {
        let (min, max) = representable_seconds();
        let range_error = || out_of_range(seconds, min as f64, max as f64);

        if !seconds.is_finite() {
            return Err(range_error());
        }

        let whole = seconds.floor();
        let mut nanos = ((seconds - whole) * NANOS_PER_SECOND).round() as u32;
        let mut whole = whole as i64;
        if nanos >= 1_000_000_000 {
            nanos -= 1_000_000_000;
            whole = whole.saturating_add(1);
        }

        DateTime::from_timestamp(whole, nanos).map(Self).ok_or_else(range_error)
    }

    /// The converted datetime.
    #[must_use]
    pub const fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Seconds since the Unix epoch, fractional part included.
    #[must_use]
    pub fn timestamp(&self) -> f64 {
        self.0.timestamp() as f64 + f64::from(self.0.timestamp_subsec_nanos()) / NANOS_PER_SECOND
    }
}

impl TryFrom<f64> for EpochNumber {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EpochNumber> for f64 {
    fn from(value: EpochNumber) -> Self {
        value.timestamp()
    }
}

impl From<EpochNumber> for DateTime<Utc> {
    fn from(value: EpochNumber) -> Self {
        value.0
    }
}

impl ExtraType for EpochNumber {
    const NAME: &'static str = "epoch_number";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        let seconds = raw.parse::<f64>().map_err(|_| {
            ValidationError::format("epoch_number", "Value must be a number of seconds")
        })?;
        Self::new(seconds)
    }

    fn normalized(&self) -> String {
        self.timestamp().to_string()
    }
}

impl FromStr for EpochNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ExtraType>::parse(s)
    }
}

impl fmt::Display for EpochNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ============================================================================
// EPOCH INTEGER
// ============================================================================

/// A timestamp given as whole seconds since the Unix epoch.
///
/// ```
/// use nebula_extra_types::types::EpochInteger;
///
/// let t: EpochInteger = "86400".parse().unwrap();
/// assert_eq!(t.datetime().to_rfc3339(), "1970-01-02T00:00:00+00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "i64")
)]
pub struct EpochInteger(DateTime<Utc>);

impl EpochInteger {
    /// Converts `seconds` to a datetime; unrepresentable values fail with
    /// `epoch_range`.
    pub fn new(seconds: i64) -> Result<Self, ValidationError> {
        let (min, max) = representable_seconds();
        DateTime::from_timestamp(seconds, 0)
            .map(Self)
            .ok_or_else(|| out_of_range(seconds, min, max))
    }

    #[must_use]
    pub const fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Whole seconds since the Unix epoch.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }
}

impl TryFrom<i64> for EpochInteger {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EpochInteger> for i64 {
    fn from(value: EpochInteger) -> Self {
        value.timestamp()
    }
}

impl From<EpochInteger> for DateTime<Utc> {
    fn from(value: EpochInteger) -> Self {
        value.0
    }
}

impl ExtraType for EpochInteger {
    const NAME: &'static str = "epoch_integer";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        let seconds = raw.parse::<i64>().map_err(|_| {
            ValidationError::format("epoch_integer", "Value must be a whole number of seconds")
        })?;
        Self::new(seconds)
    }

    fn normalized(&self) -> String {
        self.timestamp().to_string()
    }
}

impl FromStr for EpochInteger {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ExtraType>::parse(s)
    }
}

impl fmt::Display for EpochInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
