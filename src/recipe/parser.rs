// src/recipe/parser.rs

//! Recipe file parsing and validation

use crate::error::{Error, Result};
use crate::recipe::format::Recipe;
use crate::settings::SettingsAxis;
use std::path::Path;

/// Parse a recipe from a TOML string
pub fn parse_recipe(content: &str) -> Result<Recipe> {
    toml::from_str(content).map_err(|e| Error::ParseError(format!("Invalid recipe: {}", e)))
}

/// Parse a recipe from a file
pub fn parse_recipe_file(path: &Path) -> Result<Recipe> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::IoError(format!("Failed to read recipe file: {}", e)))?;

    parse_recipe(&content)
}

/// Well-known platform names used for case-mismatch warnings
const KNOWN_PLATFORMS: &[&str] = &["Linux", "Windows", "Macos", "FreeBSD", "Android", "iOS"];

/// Validate a recipe for completeness and correctness
///
/// Hard errors make the recipe unusable; the returned list carries
/// non-fatal warnings.
pub fn validate_recipe(recipe: &Recipe) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    // Check for empty name/version
    if recipe.package.name.is_empty() {
        return Err(Error::ValidationError(
            "Recipe package name cannot be empty".to_string(),
        ));
    }
    if recipe.package.version.is_empty() {
        return Err(Error::ValidationError(
            "Recipe package version cannot be empty".to_string(),
        ));
    }

    // Duplicate axes confuse the consuming tool's configuration cache
    let mut seen_axes: Vec<SettingsAxis> = Vec::new();
    for axis in recipe.settings() {
        if seen_axes.contains(axis) {
            return Err(Error::ValidationError(format!(
                "Settings axis '{}' declared more than once",
                axis
            )));
        }
        seen_axes.push(*axis);
    }

    // Duplicate package names in the unconditional set are always a mistake
    for (i, req) in recipe.requires().iter().enumerate() {
        if recipe.requires()[..i].iter().any(|r| r.name == req.name) {
            return Err(Error::ValidationError(format!(
                "Package '{}' required more than once",
                req.name
            )));
        }
    }

    // Warn about missing metadata
    if recipe.package.summary.is_none() {
        warnings.push("Missing package summary".to_string());
    }
    if recipe.package.license.is_none() {
        warnings.push("Missing package license".to_string());
    }

    if recipe.generators().is_empty() {
        warnings.push("No generators declared; no integration files will be emitted".to_string());
    }

    // Platform rules only take effect when the os axis is declared
    if !recipe.platform.is_empty() && !recipe.settings().contains(&SettingsAxis::Os) {
        warnings.push(
            "Platform-conditional requirements declared without the 'os' settings axis"
                .to_string(),
        );
    }

    // Platform keys match case-sensitively; flag near-misses
    for key in recipe.platform.keys() {
        if let Some(known) = KNOWN_PLATFORMS
            .iter()
            .find(|p| key.as_str() != **p && key.eq_ignore_ascii_case(**p))
        {
            warnings.push(format!(
                "Platform table '{}' will never match; did you mean '{}'?",
                key, known
            ));
        }
    }

    Ok(warnings)
}
