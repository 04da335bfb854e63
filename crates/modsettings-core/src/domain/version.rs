//! Schema version of a persisted settings document.
//!
//! Versions are stored as strings (`"1"`, `"1.1"`, `"2"`).  They compare
//! segment by segment: numeric segments numerically, anything else
//! lexicographically, so `"2" < "10"` and `"1" < "1.1"`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Version assigned to every freshly constructed envelope.
pub const DEFAULT_VERSION: &str = "1";

/// A non-empty schema version string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SchemaVersion(String);

impl SchemaVersion {
    /// Parses a version string, trimming surrounding whitespace.
    ///
    /// Returns `None` for an empty (or all-whitespace) string.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self(DEFAULT_VERSION.to_string())
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SchemaVersion> for String {
    fn from(version: SchemaVersion) -> Self {
        version.0
    }
}

impl TryFrom<String> for SchemaVersion {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or_else(|| "schema version must not be empty".to_string())
    }
}

impl PartialOrd for SchemaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SchemaVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut lhs = self.0.split('.');
        let mut rhs = other.0.split('.');
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => break,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) => match compare_segment(a, b) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                },
            }
        }
        // Segments such as "01" and "1" compare equal numerically; fall back
        // to the raw text so the ordering stays consistent with `Eq`.
        self.0.cmp(&other.0)
    }
}

fn compare_segment(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
