// src/generator.rs

//! Build-system integration file generation
//!
//! A recipe names the integration files the consuming tool should emit.
//! Two generators exist:
//!
//! - `CMakeDeps`: a dependency-graph description file listing every resolved
//!   requirement and its pinned version
//! - `CMakeToolchain`: a toolchain file caching the supplied build settings
//!
//! Rendering is deterministic: requirements appear in declaration order and
//! settings in axis order, so emitting twice for the same inputs produces
//! byte-identical files.

use crate::error::{Error, Result};
use crate::recipe::Recipe;
use crate::requirement::Requirement;
use crate::settings::{BuildSettings, SettingsAxis};
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumString};
use tracing::debug;

/// An output-format identifier for one build-system integration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Generator {
    /// Dependency-graph description consumed by the downstream build system
    CMakeDeps,
    /// Toolchain/build-configuration file
    CMakeToolchain,
}

impl Generator {
    /// File name this generator writes into the output directory
    pub fn filename(&self) -> &'static str {
        match self {
            Self::CMakeDeps => "prepcard_deps.cmake",
            Self::CMakeToolchain => "prepcard_toolchain.cmake",
        }
    }

    /// Render this generator's file content
    ///
    /// `resolved` must already be the effective requirement set for the
    /// settings' target os; rendering itself performs no resolution.
    pub fn render(
        &self,
        recipe: &Recipe,
        resolved: &[Requirement],
        settings: &BuildSettings,
    ) -> String {
        match self {
            Self::CMakeDeps => render_deps(recipe, resolved),
            Self::CMakeToolchain => render_toolchain(recipe, settings),
        }
    }
}

impl Serialize for Generator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Generator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct GenVisitor;

        impl Visitor<'_> for GenVisitor {
            type Value = Generator;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("one of: CMakeDeps, CMakeToolchain")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                v.parse()
                    .map_err(|_| E::custom(format!("Unknown generator '{}'", v)))
            }
        }

        deserializer.deserialize_str(GenVisitor)
    }
}

fn file_banner(recipe: &Recipe) -> String {
    format!(
        "# Generated by prepcard for {}/{} - do not edit\n",
        recipe.package.name, recipe.package.version
    )
}

fn render_deps(recipe: &Recipe, resolved: &[Requirement]) -> String {
    let mut out = file_banner(recipe);

    let names: Vec<&str> = resolved.iter().map(|r| r.name.as_str()).collect();
    out.push_str(&format!("set(PREPCARD_REQUIRES \"{}\")\n", names.join(";")));
    out.push('\n');

    for req in resolved {
        out.push_str(&format!("set({}_VERSION \"{}\")\n", req.name, req.pin));
    }

    out
}

fn render_toolchain(recipe: &Recipe, settings: &BuildSettings) -> String {
    let mut out = file_banner(recipe);

    for axis in recipe.settings() {
        if let Some(value) = settings.get(*axis) {
            out.push_str(&format!(
                "set(PREPCARD_{} \"{}\" CACHE STRING \"Build setting: {}\")\n",
                axis.to_string().to_uppercase(),
                value,
                axis
            ));
        }
    }

    // Mirror the two settings CMake itself keys on
    if let Some(os) = settings.os() {
        out.push_str(&format!("set(CMAKE_SYSTEM_NAME \"{}\")\n", os));
    }
    if let Some(build_type) = settings.get(SettingsAxis::BuildType) {
        out.push_str(&format!(
            "set(CMAKE_BUILD_TYPE \"{}\" CACHE STRING \"Build type\")\n",
            build_type
        ));
    }

    out
}

/// Emit every generator the recipe declares into `out_dir`
///
/// The requirement set is resolved once from the settings' `os` value (an
/// unset axis resolves like any unknown platform: no extras). Returns the
/// paths written, in generator declaration order.
pub fn emit_all(recipe: &Recipe, settings: &BuildSettings, out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .map_err(|e| Error::IoError(format!("Failed to create output directory: {}", e)))?;

    let target_os = settings.os().unwrap_or("");
    let resolved = recipe.resolve_requirements(target_os);

    let mut written = Vec::new();
    for generator in recipe.generators() {
        let path = out_dir.join(generator.filename());
        let content = generator.render(recipe, &resolved, settings);
        debug!(file = %path.display(), "writing generator output");
        std::fs::write(&path, content)
            .map_err(|e| Error::IoError(format!("Failed to write {}: {}", path.display(), e)))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn linux_settings() -> BuildSettings {
        BuildSettings::new()
            .with(SettingsAxis::Os, "Linux")
            .with(SettingsAxis::Arch, "x86_64")
            .with(SettingsAxis::BuildType, "Release")
    }

    #[test]
    fn test_generator_string_roundtrip() {
        assert_eq!(Generator::CMakeDeps.to_string(), "CMakeDeps");
        assert_eq!(Generator::CMakeToolchain.to_string(), "CMakeToolchain");
        assert_eq!("CMakeDeps".parse::<Generator>().unwrap(), Generator::CMakeDeps);
        assert!("Makefile".parse::<Generator>().is_err());
    }

    #[test]
    fn test_render_deps_lists_resolved_requirements() {
        let recipe = Recipe::bgfx_demo();
        let resolved = recipe.resolve_requirements("Linux");
        let content = Generator::CMakeDeps.render(&recipe, &resolved, &linux_settings());

        assert!(content.contains("set(PREPCARD_REQUIRES \"fmt;glm;wayland\")"));
        assert!(content.contains("set(fmt_VERSION \"9.1.0\")"));
        assert!(content.contains("set(glm_VERSION \"cci.20230113\")"));
        assert!(content.contains("set(wayland_VERSION \"1.21.0\")"));
    }

    #[test]
    fn test_render_deps_without_platform_extras() {
        let recipe = Recipe::bgfx_demo();
        let resolved = recipe.resolve_requirements("Windows");
        let content = Generator::CMakeDeps.render(&recipe, &resolved, &BuildSettings::new());

        assert!(content.contains("set(PREPCARD_REQUIRES \"fmt;glm\")"));
        assert!(!content.contains("wayland"));
    }

    #[test]
    fn test_render_toolchain_caches_settings() {
        let recipe = Recipe::bgfx_demo();
        let content = Generator::CMakeToolchain.render(&recipe, &[], &linux_settings());

        assert!(content.contains("set(PREPCARD_OS \"Linux\""));
        assert!(content.contains("set(PREPCARD_ARCH \"x86_64\""));
        assert!(content.contains("set(PREPCARD_BUILD_TYPE \"Release\""));
        assert!(content.contains("set(CMAKE_SYSTEM_NAME \"Linux\")"));
        assert!(content.contains("set(CMAKE_BUILD_TYPE \"Release\""));
        // Compiler axis is unset and must not appear
        assert!(!content.contains("PREPCARD_COMPILER"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let recipe = Recipe::bgfx_demo();
        let settings = linux_settings();
        let resolved = recipe.resolve_requirements("Linux");

        let a = Generator::CMakeDeps.render(&recipe, &resolved, &settings);
        let b = Generator::CMakeDeps.render(&recipe, &resolved, &settings);
        assert_eq!(a, b);
    }

    #[test]
    fn test_emit_all_writes_declared_generators() {
        let recipe = Recipe::bgfx_demo();
        let dir = tempdir().unwrap();

        let written = emit_all(&recipe, &linux_settings(), dir.path()).unwrap();
        assert_eq!(written.len(), 2);
        assert!(dir.path().join("prepcard_deps.cmake").is_file());
        assert!(dir.path().join("prepcard_toolchain.cmake").is_file());

        let deps = std::fs::read_to_string(&written[0]).unwrap();
        assert!(deps.contains("wayland_VERSION"));
    }

    #[test]
    fn test_emit_all_without_os_setting() {
        let recipe = Recipe::bgfx_demo();
        let dir = tempdir().unwrap();

        let written = emit_all(&recipe, &BuildSettings::new(), dir.path()).unwrap();
        let deps = std::fs::read_to_string(&written[0]).unwrap();
        // No os value behaves like an unknown platform
        assert!(!deps.contains("wayland"));
    }

    #[test]
    fn test_emit_all_creates_output_directory() {
        let recipe = Recipe::bgfx_demo();
        let dir = tempdir().unwrap();
        let nested = dir.path().join("out/build");

        emit_all(&recipe, &linux_settings(), &nested).unwrap();
        assert!(nested.join("prepcard_deps.cmake").is_file());
    }
}
