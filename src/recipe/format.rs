// src/recipe/format.rs

//! Recipe file format definitions
//!
//! Recipes are TOML files describing a package's build-time contract with
//! the consuming package manager. The descriptor is immutable once
//! constructed; the only evaluation step is requirement resolution against
//! a target operating system.

use crate::generator::Generator;
use crate::requirement::Requirement;
use crate::settings::SettingsAxis;
use crate::version::VersionPin;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete recipe descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Package metadata
    pub package: PackageSection,

    /// Build contract: settings axes, requirements, generators
    pub build: BuildSection,

    /// Platform-conditional requirements, keyed by target operating system
    ///
    /// Keys use the recipe platform vocabulary (`Linux`, `Windows`, ...)
    /// and match case-sensitively.
    #[serde(default)]
    pub platform: BTreeMap<String, PlatformSection>,
}

impl Recipe {
    /// The settings axes this recipe keys its configuration on
    pub fn settings(&self) -> &[SettingsAxis] {
        &self.build.settings
    }

    /// The unconditional requirement set
    pub fn requires(&self) -> &[Requirement] {
        &self.build.requires
    }

    /// The build-system integration files to emit, independent of platform
    pub fn generators(&self) -> &[Generator] {
        &self.build.generators
    }

    /// Resolve the effective requirement set for a target operating system
    ///
    /// Returns the unconditional requirements, followed by the extra
    /// requirements of the matching `[platform.<os>]` table if one exists.
    /// Unknown or unrecognized `target_os` values fall through to the
    /// unconditional set; there is no error path. Deterministic and free of
    /// side effects, so repeated calls with the same input yield the same
    /// set.
    pub fn resolve_requirements(&self, target_os: &str) -> Vec<Requirement> {
        let mut resolved: Vec<Requirement> = self.build.requires.clone();

        if let Some(section) = self.platform.get(target_os) {
            for req in &section.requires {
                if !resolved.contains(req) {
                    resolved.push(req.clone());
                }
            }
        }

        resolved
    }

    /// The built-in descriptor for the bgfx demo application
    ///
    /// Declares the four canonical settings axes, `fmt/9.1.0` and
    /// `glm/cci.20230113` unconditionally, `wayland/1.21.0` on Linux, and
    /// the `CMakeDeps` and `CMakeToolchain` generators.
    pub fn bgfx_demo() -> Self {
        let glm_date =
            NaiveDate::from_ymd_opt(2023, 1, 13).expect("valid snapshot date literal");

        let mut platform = BTreeMap::new();
        platform.insert(
            "Linux".to_string(),
            PlatformSection {
                requires: vec![Requirement::new(
                    "wayland",
                    VersionPin::Release("1.21.0".to_string()),
                )],
            },
        );

        Self {
            package: PackageSection {
                name: "bgfx-demo".to_string(),
                version: "1.0.0".to_string(),
                summary: Some("Cross-platform bgfx rendering demo".to_string()),
                license: None,
                homepage: None,
            },
            build: BuildSection {
                settings: vec![
                    SettingsAxis::Os,
                    SettingsAxis::Compiler,
                    SettingsAxis::BuildType,
                    SettingsAxis::Arch,
                ],
                requires: vec![
                    Requirement::new("fmt", VersionPin::Release("9.1.0".to_string())),
                    Requirement::new(
                        "glm",
                        VersionPin::Snapshot {
                            stream: "cci".to_string(),
                            date: glm_date,
                        },
                    ),
                ],
                generators: vec![Generator::CMakeDeps, Generator::CMakeToolchain],
            },
            platform,
        }
    }
}

/// Package metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSection {
    /// Package name
    pub name: String,

    /// Package version
    pub version: String,

    /// Short description
    #[serde(default)]
    pub summary: Option<String>,

    /// License identifier (SPDX)
    #[serde(default)]
    pub license: Option<String>,

    /// Homepage URL
    #[serde(default)]
    pub homepage: Option<String>,
}

/// Build contract section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    /// Settings axes the consuming tool should key its configuration on
    ///
    /// Axis names only; values are supplied at build time by the tool.
    #[serde(default = "default_settings")]
    pub settings: Vec<SettingsAxis>,

    /// Unconditional requirements with pinned versions
    ///
    /// Format: `["fmt/9.1.0", "glm/cci.20230113"]`
    #[serde(default)]
    pub requires: Vec<Requirement>,

    /// Integration files the consuming tool should emit
    #[serde(default)]
    pub generators: Vec<Generator>,
}

fn default_settings() -> Vec<SettingsAxis> {
    vec![
        SettingsAxis::Os,
        SettingsAxis::Compiler,
        SettingsAxis::BuildType,
        SettingsAxis::Arch,
    ]
}

/// Extra requirements for one target platform
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlatformSection {
    /// Requirements appended when the target os matches this table's key
    #[serde(default)]
    pub requires: Vec<Requirement>,
}
