//! Version record and its canonical display form

use crate::error::{RecordError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A build's version as read from a source checkout
///
/// `patch` is optional; an absent patch and an explicit zero both leave the
/// patch segment out of the canonical display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    major: u32,
    minor: u32,
    #[serde(default)]
    patch: Option<u32>,
    #[serde(default, deserialize_with = "status_from_scalar")]
    status: String,
}

/// Accept any scalar status and keep its textual form
fn status_from_scalar<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match toml::Value::deserialize(deserializer)? {
        toml::Value::String(s) => Ok(s),
        toml::Value::Integer(n) => Ok(n.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Datetime(dt) => Ok(dt.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "status must be a scalar, got {}",
            other.type_str()
        ))),
    }
}

impl VersionRecord {
    /// Create a record with no patch and an empty status
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
            status: String::new(),
        }
    }

    pub fn with_patch(mut self, patch: impl Into<Option<u32>>) -> Self {
        self.patch = patch.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> Option<u32> {
        self.patch
    }

    /// Release-stage label, returned verbatim
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Canonical display string: `major.minor`, plus `.patch` when non-zero
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Strict byte-for-byte comparison against the canonical display string
    pub fn matches(&self, candidate: &str) -> bool {
        self.format() == candidate
    }

    /// Like [`matches`](Self::matches), but reports what was expected
    pub fn check(&self, candidate: &str) -> Result<()> {
        let expected = self.format();
        if expected == candidate {
            Ok(())
        } else {
            Err(RecordError::Mismatch {
                expected,
                actual: candidate.to_string(),
            })
        }
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) if patch != 0 => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            _ => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

/// Format a record as its canonical display string
pub fn format(record: &VersionRecord) -> String {
    record.format()
}

/// Status label of a record
pub fn status_of(record: &VersionRecord) -> String {
    record.status().to_string()
}

/// Whether `candidate` is exactly the record's canonical display string
pub fn matches(record: &VersionRecord, candidate: &str) -> bool {
    record.matches(candidate)
}
