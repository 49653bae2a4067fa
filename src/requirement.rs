// src/requirement.rs

//! Requirement declarations: `package/version` pairs
//!
//! A requirement names a third-party library and pins it to an exact
//! version. The textual form is `name/version`:
//!
//! - `fmt/9.1.0` - the fmt formatting library, release 9.1.0
//! - `glm/cci.20230113` - the glm math library, dated snapshot
//! - `wayland/1.21.0` - the wayland protocol library
//!
//! Recipes list requirements as strings in this form; the consuming package
//! manager resolves them (transitively) against its own package universe.

use crate::error::{Error, Result};
use crate::version::VersionPin;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single dependency declaration: package identifier plus version pin
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Requirement {
    /// Package identifier in the consuming tool's namespace
    pub name: String,
    /// Exact version pin
    pub pin: VersionPin,
}

impl Requirement {
    /// Create a new requirement
    pub fn new(name: impl Into<String>, pin: VersionPin) -> Self {
        Self {
            name: name.into(),
            pin,
        }
    }

    /// Parse a requirement from the `name/version` form
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        let (name, version) = s.split_once('/').ok_or_else(|| {
            Error::ParseError(format!(
                "Invalid requirement '{}': expected name/version",
                s
            ))
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::ParseError(format!(
                "Invalid requirement '{}': empty package name",
                s
            )));
        }
        if version.contains('/') {
            return Err(Error::ParseError(format!(
                "Invalid requirement '{}': multiple '/' separators",
                s
            )));
        }

        let pin = VersionPin::parse(version)?;
        Ok(Self::new(name, pin))
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.pin)
    }
}

impl FromStr for Requirement {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Requirement::parse(s)
    }
}

// Requirements serialize as their textual form so recipe files read
// `requires = ["fmt/9.1.0"]` rather than nested tables.

impl Serialize for Requirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Requirement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ReqVisitor;

        impl Visitor<'_> for ReqVisitor {
            type Value = Requirement;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a requirement string in name/version form")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                Requirement::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(ReqVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_release_requirement() {
        let req = Requirement::parse("fmt/9.1.0").unwrap();
        assert_eq!(req.name, "fmt");
        assert_eq!(req.pin.to_string(), "9.1.0");
    }

    #[test]
    fn test_parse_snapshot_requirement() {
        let req = Requirement::parse("glm/cci.20230113").unwrap();
        assert_eq!(req.name, "glm");
        assert!(req.pin.is_snapshot());
    }

    #[test]
    fn test_parse_missing_separator() {
        assert!(Requirement::parse("fmt").is_err());
    }

    #[test]
    fn test_parse_empty_name() {
        assert!(Requirement::parse("/9.1.0").is_err());
    }

    #[test]
    fn test_parse_empty_version() {
        assert!(Requirement::parse("fmt/").is_err());
    }

    #[test]
    fn test_parse_extra_separator() {
        assert!(Requirement::parse("fmt/9.1.0/extra").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for s in ["fmt/9.1.0", "glm/cci.20230113", "wayland/1.21.0"] {
            let req: Requirement = s.parse().unwrap();
            assert_eq!(req.to_string(), s);
        }
    }

    #[test]
    fn test_serde_string_form() {
        let req = Requirement::parse("fmt/9.1.0").unwrap();
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, "\"fmt/9.1.0\"");

        let back: Requirement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn test_serde_rejects_malformed() {
        let result: std::result::Result<Requirement, _> = serde_json::from_str("\"fmt\"");
        assert!(result.is_err());
    }
}
