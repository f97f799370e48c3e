//! `s3://bucket/key` paths.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::foundation::{ExtraType, ValidationError};

static S3_PATH_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^s3://([^/]+)/(.*?([^/]+)/?)$").unwrap());

/// An S3 object path split into bucket, key and last key segment.
///
/// ```
/// use nebula_extra_types::types::S3Path;
///
/// let path: S3Path = "s3://my-data-bucket/2023/08/29/sales-report.csv".parse().unwrap();
/// assert_eq!(path.bucket(), "my-data-bucket");
/// assert_eq!(path.key(), "2023/08/29/sales-report.csv");
/// assert_eq!(path.last_key(), "sales-report.csv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct S3Path {
    value: String,
    bucket: Range<usize>,
    key: Range<usize>,
    last_key: Range<usize>,
}

impl S3Path {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.value[self.bucket.clone()]
    }

    /// Everything after the bucket, trailing slash included.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.value[self.key.clone()]
    }

    /// Final path segment, usually a file name.
    #[must_use]
    pub fn last_key(&self) -> &str {
        &self.value[self.last_key.clone()]
    }
}

impl ExtraType for S3Path {
    const NAME: &'static str = "s3_path";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || {
            ValidationError::format("s3_path", "Value must be of the form s3://bucket/key")
                .with_param("pattern", S3_PATH_REGEX.as_str())
        };

        let captures = S3_PATH_REGEX.captures(raw).ok_or_else(invalid)?;
        let (Some(bucket), Some(key), Some(last_key)) =
            (captures.get(1), captures.get(2), captures.get(3))
        else {
            return Err(invalid());
        };

        Ok(Self {
            value: raw.to_owned(),
            bucket: bucket.range(),
            key: key.range(),
            last_key: last_key.range(),
        })
    }

    fn normalized(&self) -> String {
        self.value.clone()
    }
}

impl FromStr for S3Path {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ExtraType>::parse(s)
    }
}

impl TryFrom<String> for S3Path {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for S3Path {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<S3Path> for String {
    fn from(value: S3Path) -> Self {
        value.value
    }
}

impl AsRef<str> for S3Path {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for S3Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
