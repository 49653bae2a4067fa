// src/version.rs

//! Version pins for requirement declarations
//!
//! Recipes pin every requirement to an exact version. Two pin shapes exist:
//!
//! - **Release**: a dotted release version like `9.1.0`
//! - **Snapshot**: a dated snapshot identifier like `cci.20230113`, naming a
//!   stream and the date the snapshot was taken
//!
//! Release pins compare numerically per component (with a semver fallback for
//! non-numeric components); snapshot pins compare by date within the same
//! stream. Pins of different kinds are unordered.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use semver::Version;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An exact version pin for a requirement
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionPin {
    /// Dotted release version, e.g. `9.1.0`
    Release(String),
    /// Dated snapshot, e.g. `cci.20230113`
    Snapshot {
        /// Snapshot stream identifier (the part before the date)
        stream: String,
        /// Date the snapshot was taken
        date: NaiveDate,
    },
}

impl VersionPin {
    /// Parse a version pin string
    ///
    /// A pin whose final dot-separated component is an eight-digit `YYYYMMDD`
    /// date is a snapshot; anything else is a release pin taken verbatim.
    ///
    /// Examples:
    /// - `"9.1.0"` → release
    /// - `"cci.20230113"` → snapshot of stream `cci` taken 2023-01-13
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::ParseError("Empty version pin".to_string()));
        }

        if let Some((stream, date_str)) = s.rsplit_once('.') {
            if !stream.is_empty()
                && date_str.len() == 8
                && date_str.chars().all(|c| c.is_ascii_digit())
            {
                if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y%m%d") {
                    return Ok(Self::Snapshot {
                        stream: stream.to_string(),
                        date,
                    });
                }
            }
        }

        Ok(Self::Release(s.to_string()))
    }

    /// Whether this pin names a dated snapshot rather than a release
    pub fn is_snapshot(&self) -> bool {
        matches!(self, Self::Snapshot { .. })
    }

    /// Convert a release pin to a semver::Version for comparison
    ///
    /// Release pins may not be semver-compliant, so we normalize:
    /// - If the pin parses as semver, use it directly
    /// - Otherwise extract major.minor.patch from the leading numeric parts
    fn to_semver(version: &str) -> Version {
        if let Ok(v) = Version::parse(version) {
            return v;
        }

        let parts: Vec<&str> = version.split('.').collect();
        let major = parts.first().and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);
        let minor = parts.get(1).and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);
        let patch = parts.get(2).and_then(|s| s.parse::<u64>().ok()).unwrap_or(0);

        Version::new(major, minor, patch)
    }
}

impl PartialOrd for VersionPin {
    /// Compare two pins of the same kind; pins of different kinds (or
    /// snapshots of different streams) are unordered.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Release(a), Self::Release(b)) => {
                let (va, vb) = (Self::to_semver(a), Self::to_semver(b));
                match va.cmp(&vb) {
                    // Fall back to string comparison when normalization
                    // collapses distinct pins onto the same triple
                    Ordering::Equal => Some(a.cmp(b)),
                    ord => Some(ord),
                }
            }
            (
                Self::Snapshot { stream: sa, date: da },
                Self::Snapshot { stream: sb, date: db },
            ) => {
                if sa == sb {
                    Some(da.cmp(db))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl fmt::Display for VersionPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Release(v) => write!(f, "{}", v),
            Self::Snapshot { stream, date } => {
                write!(f, "{}.{}", stream, date.format("%Y%m%d"))
            }
        }
    }
}

impl FromStr for VersionPin {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        VersionPin::parse(s)
    }
}
