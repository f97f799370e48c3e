//! Semantic versions.

use std::fmt;
use std::str::FromStr;

use crate::foundation::{ExtraType, ValidationError};

/// A `MAJOR.MINOR.PATCH[-PRE][+BUILD]` version.
///
/// Ordering follows semver precedence, with build metadata as the final
/// tie-break.
///
/// ```
/// use nebula_extra_types::types::SemanticVersion;
///
/// let v: SemanticVersion = "1.2.3-alpha.1+build.5".parse().unwrap();
/// assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 3));
/// assert_eq!(v.pre_release(), "alpha.1");
/// assert_eq!(v.build(), "build.5");
/// assert!(v < "1.2.3".parse().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct SemanticVersion(semver::Version);

impl SemanticVersion {
    #[must_use]
    pub const fn major(&self) -> u64 {
        self.0.major
    }

    #[must_use]
    pub const fn minor(&self) -> u64 {
        self.0.minor
    }

    #[must_use]
    pub const fn patch(&self) -> u64 {
        self.0.patch
    }

    /// Pre-release identifiers, empty for a release version.
    #[must_use]
    pub fn pre_release(&self) -> &str {
        self.0.pre.as_str()
    }

    /// Build metadata, empty when absent.
    #[must_use]
    pub fn build(&self) -> &str {
        self.0.build.as_str()
    }

    /// Returns true for a version without pre-release identifiers.
    #[must_use]
    pub fn is_release(&self) -> bool {
        self.0.pre.is_empty()
    }

    /// The wrapped `semver` value.
    #[must_use]
    pub const fn as_version(&self) -> &semver::Version {
        &self.0
    }
}

impl ExtraType for SemanticVersion {
    const NAME: &'static str = "semantic_version";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        semver::Version::parse(raw).map(Self).map_err(|e| {
            ValidationError::format("semantic_version", "{version} is not valid SemVer string")
                .with_param("version", raw.to_owned())
                .with_param("reason", e.to_string())
        })
    }

    fn normalized(&self) -> String {
        self.0.to_string()
    }
}

impl From<semver::Version> for SemanticVersion {
    fn from(version: semver::Version) -> Self {
        Self(version)
    }
}

impl FromStr for SemanticVersion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ExtraType>::parse(s)
    }
}

impl TryFrom<String> for SemanticVersion {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for SemanticVersion {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SemanticVersion> for String {
    fn from(value: SemanticVersion) -> Self {
        value.0.to_string()
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
