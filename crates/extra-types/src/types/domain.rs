//! Domain names.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::foundation::{ExtraType, ValidationError};

/// Accepted domain length in characters, after trimming.
pub const DOMAIN_LENGTH: RangeInclusive<usize> = 1..=253;

static DOMAIN_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}$").unwrap()
});

/// A domain name, trimmed and lower-cased.
///
/// Each label is 1 to 63 characters of `[a-z0-9-]` and may not start or
/// end with a hyphen; the top-level label is 2 to 63 letters.
///
/// ```
/// use nebula_extra_types::types::DomainStr;
///
/// let domain: DomainStr = "  Example.COM ".parse().unwrap();
/// assert_eq!(domain.as_str(), "example.com");
/// assert!("localhost".parse::<DomainStr>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct DomainStr(String);

impl DomainStr {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Labels from left to right.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The top-level label, e.g. `com`.
    #[must_use]
    pub fn tld(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or_default()
    }
}

impl ExtraType for DomainStr {
    const NAME: &'static str = "domain";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim().to_lowercase();

        if !DOMAIN_LENGTH.contains(&value.chars().count()) {
            return Err(ValidationError::length(
                "domain_length",
                "Domain must be between 1 and 253 characters",
            ));
        }

        if !DOMAIN_REGEX.is_match(&value) {
            return Err(ValidationError::format("domain_format", "Invalid domain format"));
        }

        Ok(Self(value))
    }

    fn normalized(&self) -> String {
        self.0.clone()
    }
}

impl FromStr for DomainStr {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ExtraType>::parse(s)
    }
}

impl TryFrom<String> for DomainStr {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for DomainStr {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DomainStr> for String {
    fn from(value: DomainStr) -> Self {
        value.0
    }
}

impl AsRef<str> for DomainStr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case("example.com", "example.com")]
    #[case("  Sub.Example.CO.uk\n", "sub.example.co.uk")]
    #[case("xn--bcher-kva.example", "xn--bcher-kva.example")]
    #[case("a-1.b2.io", "a-1.b2.io")]
    fn test_valid(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(DomainStr::parse(raw).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("localhost")]
    #[case("-bad.com")]
    #[case("bad-.com")]
    #[case("example.c")]
    #[case("example.c0m")]
    #[case("exa_mple.com")]
    #[case("example..com")]
    #[case("example.com.")]
    fn test_invalid_format(#[case] raw: &str) {
        let err = DomainStr::parse(raw).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Format);
        assert_eq!(err.code, "domain_format");
    }

    #[test]
    fn test_length() {
        let err = DomainStr::parse("   ").unwrap_err();
        assert_eq!(err.code, "domain_length");

        let long = format!("{}com", "a.".repeat(126));
        assert_eq!(DomainStr::parse(&long).unwrap_err().code, "domain_length");
    }

    #[test]
    fn test_label_limit() {
        let ok = format!("{}.com", "a".repeat(63));
        assert!(DomainStr::parse(&ok).is_ok());
        let too_long = format!("{}.com", "a".repeat(64));
        assert_eq!(DomainStr::parse(&too_long).unwrap_err().code, "domain_format");
    }

    #[test]
    fn test_accessors() {
        let domain = DomainStr::parse("mail.example.org").unwrap();
        assert_eq!(domain.tld(), "org");
        assert_eq!(domain.labels().collect::<Vec<_>>(), ["mail", "example", "org"]);
    }
}
