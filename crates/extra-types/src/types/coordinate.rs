//! Geographic coordinates.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::foundation::{ExtraType, ValidationError};

// ============================================================================
// LATITUDE / LONGITUDE
// ============================================================================

macro_rules! bounded_degrees {
    ($(#[$meta:meta])* $name:ident, $range:expr, $code:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "f64", into = "f64")
        )]
        pub struct $name(f64);

        impl $name {
            /// Accepted range in degrees, inclusive.
            pub const RANGE: RangeInclusive<f64> = $range;

            /// Checks that `degrees` is inside [`Self::RANGE`]. NaN never is.
            pub fn new(degrees: f64) -> Result<Self, ValidationError> {
                if Self::RANGE.contains(&degrees) {
                    Ok(Self(degrees))
                } else {
                    Err(ValidationError::out_of_range(
                        $code,
                        *Self::RANGE.start(),
                        *Self::RANGE.end(),
                        degrees,
                    ))
                }
            }

            /// Value in degrees.
            #[must_use]
            pub const fn degrees(self) -> f64 {
                self.0
            }
        }

        impl TryFrom<f64> for $name {
            type Error = ValidationError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

bounded_degrees!(
    /// Latitude in degrees, between -90 and 90 inclusive.
    Latitude,
    -90.0..=90.0,
    "latitude_range"
);

bounded_degrees!(
    /// Longitude in degrees, between -180 and 180 inclusive.
    Longitude,
    -180.0..=180.0,
    "longitude_range"
);

// ============================================================================
// COORDINATE
// ============================================================================

/// A latitude / longitude pair.
///
/// Parses from `"lat,lon"` text; the default is null island `(0, 0)`.
///
/// ```
/// use nebula_extra_types::types::Coordinate;
///
/// let c: Coordinate = "41.40338, 2.17403".parse().unwrap();
/// assert_eq!(c.latitude().degrees(), 41.40338);
/// assert_eq!(c.to_string(), "41.40338,2.17403");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Coordinate {
    latitude: Latitude,
    longitude: Longitude,
}

impl Coordinate {
    /// Builds a coordinate from raw degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            latitude: Latitude::new(latitude)?,
            longitude: Longitude::new(longitude)?,
        })
    }

    #[must_use]
    pub const fn latitude(&self) -> Latitude {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> Longitude {
        self.longitude
    }
}

impl From<(Latitude, Longitude)> for Coordinate {
    fn from((latitude, longitude): (Latitude, Longitude)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = ValidationError;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(latitude, longitude)
    }
}

impl ExtraType for Coordinate {
    const NAME: &'static str = "coordinate";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        let not_recognized = || {
            ValidationError::format(
                "coordinate_error",
                "value is not a valid coordinate: string is not recognized as a valid coordinate",
            )
        };

        let mut parts = raw.split(',').map(|part| part.trim().parse::<f64>());
        let (Some(Ok(latitude)), Some(Ok(longitude)), None) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(not_recognized());
        };

        Self::new(latitude, longitude)
    }

    fn normalized(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Coordinate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ExtraType>::parse(s)
    }
}

impl TryFrom<&str> for Coordinate {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        /// Accepted input shapes: `"lat,lon"`, `[lat, lon]` or the struct form.
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Pair(f64, f64),
            Fields { latitude: f64, longitude: f64 },
        }

        let parsed = match Repr::deserialize(deserializer)? {
            Repr::Text(text) => text.parse(),
            Repr::Pair(latitude, longitude) | Repr::Fields { latitude, longitude } => {
                Self::new(latitude, longitude)
            }
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// TESTS
// ============================================================================
