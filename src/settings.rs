// src/settings.rs
//! Build settings axes and their externally supplied values
//!
//! A recipe declares *which* configuration axes it cares about (operating
//! system, compiler, build type, architecture); it never assigns values.
//! Values arrive from the consuming tool's own configuration or environment
//! detection and are carried in [`BuildSettings`].

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// A named dimension of build configuration
///
/// The canonical axis set is exactly these four; the consuming tool keys its
/// configuration cache on their values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum SettingsAxis {
    /// Target operating system
    Os,
    /// Compiler family and version
    Compiler,
    /// Build type (Debug, Release, ...)
    BuildType,
    /// Target CPU architecture
    Arch,
}

impl Serialize for SettingsAxis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SettingsAxis {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AxisVisitor;

        impl Visitor<'_> for AxisVisitor {
            type Value = SettingsAxis;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("one of: os, compiler, build_type, arch")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse()
                    .map_err(|_| E::custom(format!("Unknown settings axis '{}'", v)))
            }
        }

        deserializer.deserialize_str(AxisVisitor)
    }
}

/// Axis values supplied by the consuming tool
///
/// Unset axes are simply absent; the recipe side never requires a value to
/// be present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSettings {
    values: BTreeMap<SettingsAxis, String>,
}

impl BuildSettings {
    /// Create an empty settings assignment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an axis value (builder style)
    pub fn with(mut self, axis: SettingsAxis, value: impl Into<String>) -> Self {
        self.values.insert(axis, value.into());
        self
    }

    /// Set an axis value in place
    pub fn set(&mut self, axis: SettingsAxis, value: impl Into<String>) {
        self.values.insert(axis, value.into());
    }

    /// Get an axis value, if assigned
    pub fn get(&self, axis: SettingsAxis) -> Option<&str> {
        self.values.get(&axis).map(|s| s.as_str())
    }

    /// The target operating system, if assigned
    pub fn os(&self) -> Option<&str> {
        self.get(SettingsAxis::Os)
    }

    /// Whether any axis has a value
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate assigned (axis, value) pairs in axis order
    pub fn iter(&self) -> impl Iterator<Item = (SettingsAxis, &str)> {
        self.values.iter().map(|(a, v)| (*a, v.as_str()))
    }

    /// Detect settings from the host environment
    ///
    /// Fills the `os` and `arch` axes from `std::env::consts`, mapped onto
    /// the platform vocabulary recipes use (`Linux`, `Windows`, `Macos`).
    /// Compiler and build type have no host-side answer and stay unset.
    pub fn detect() -> Self {
        Self::new()
            .with(SettingsAxis::Os, platform_name(std::env::consts::OS))
            .with(SettingsAxis::Arch, std::env::consts::ARCH)
    }
}

impl fmt::Display for BuildSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .values
            .iter()
            .map(|(axis, value)| format!("{}={}", axis, value))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Map a `std::env::consts::OS` identifier onto the recipe platform name
///
/// Recipes use capitalized platform names (`Linux`, `Windows`, `Macos`);
/// unknown identifiers get their first letter capitalized.
pub fn platform_name(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "windows" => "Windows".to_string(),
        "macos" => "Macos".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "android" => "Android".to_string(),
        "ios" => "iOS".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_axis_string_roundtrip() {
        for axis in SettingsAxis::iter() {
            let s = axis.to_string();
            let back: SettingsAxis = s.parse().unwrap();
            assert_eq!(back, axis);
        }
    }

    #[test]
    fn test_axis_names() {
        assert_eq!(SettingsAxis::Os.to_string(), "os");
        assert_eq!(SettingsAxis::Compiler.to_string(), "compiler");
        assert_eq!(SettingsAxis::BuildType.to_string(), "build_type");
        assert_eq!(SettingsAxis::Arch.to_string(), "arch");
    }

    #[test]
    fn test_axis_parse_unknown() {
        assert!("flavor".parse::<SettingsAxis>().is_err());
    }

    #[test]
    fn test_axis_count() {
        assert_eq!(SettingsAxis::iter().count(), 4);
    }

    #[test]
    fn test_build_settings_builder() {
        let settings = BuildSettings::new()
            .with(SettingsAxis::Os, "Linux")
            .with(SettingsAxis::Arch, "x86_64");

        assert_eq!(settings.os(), Some("Linux"));
        assert_eq!(settings.get(SettingsAxis::Arch), Some("x86_64"));
        assert_eq!(settings.get(SettingsAxis::Compiler), None);
        assert!(!settings.is_empty());
    }

    #[test]
    fn test_build_settings_empty() {
        let settings = BuildSettings::new();
        assert!(settings.is_empty());
        assert_eq!(settings.os(), None);
    }

    #[test]
    fn test_build_settings_display() {
        let settings = BuildSettings::new()
            .with(SettingsAxis::Os, "Linux")
            .with(SettingsAxis::BuildType, "Release");
        // Axis order: os < compiler < build_type < arch
        assert_eq!(settings.to_string(), "os=Linux, build_type=Release");
    }

    #[test]
    fn test_detect_sets_os_and_arch() {
        let settings = BuildSettings::detect();
        assert!(settings.os().is_some());
        assert!(settings.get(SettingsAxis::Arch).is_some());
        assert_eq!(settings.get(SettingsAxis::Compiler), None);
        assert_eq!(settings.get(SettingsAxis::BuildType), None);
    }

    #[test]
    fn test_platform_name_mapping() {
        assert_eq!(platform_name("linux"), "Linux");
        assert_eq!(platform_name("windows"), "Windows");
        assert_eq!(platform_name("macos"), "Macos");
        assert_eq!(platform_name("haiku"), "Haiku");
    }

    #[test]
    fn test_axis_serde() {
        let json = serde_json::to_string(&SettingsAxis::BuildType).unwrap();
        assert_eq!(json, "\"build_type\"");
        let back: SettingsAxis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SettingsAxis::BuildType);
    }
}
