// src/commands.rs

//! Command implementations for the prepcard CLI
//!
//! Each function backs one subcommand defined in `cli`. Implementations
//! return `anyhow::Result` and leave process exit codes to `main`.

use crate::cli::Cli;
use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use prepcard::{
    emit_all, parse_recipe_file, platform_name, validate_recipe, BuildSettings, Recipe,
    SettingsAxis,
};
use std::path::Path;
use tracing::info;

/// Load a recipe from a file, or fall back to the built-in descriptor
fn load_recipe(path: Option<&Path>) -> Result<Recipe> {
    match path {
        Some(path) => parse_recipe_file(path)
            .with_context(|| format!("Failed to load recipe from {}", path.display())),
        None => Ok(Recipe::bgfx_demo()),
    }
}

/// Pick the target operating system: explicit flag, or host detection
fn target_os(os: Option<String>) -> String {
    os.unwrap_or_else(|| platform_name(std::env::consts::OS))
}

/// Show a recipe's declared contract
pub fn show(recipe_path: Option<&Path>, json: bool) -> Result<()> {
    let recipe = load_recipe(recipe_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recipe)?);
        return Ok(());
    }

    println!("{}/{}", recipe.package.name, recipe.package.version);
    if let Some(summary) = &recipe.package.summary {
        println!("  {}", summary);
    }

    let axes: Vec<String> = recipe.settings().iter().map(|a| a.to_string()).collect();
    println!("settings:   {}", axes.join(", "));

    println!("requires:");
    for req in recipe.requires() {
        println!("  {}", req);
    }
    for (os, section) in &recipe.platform {
        println!("requires ({} only):", os);
        for req in &section.requires {
            println!("  {}", req);
        }
    }

    let generators: Vec<String> = recipe.generators().iter().map(|g| g.to_string()).collect();
    println!("generators: {}", generators.join(", "));

    Ok(())
}

/// Resolve the effective requirement set for a target operating system
pub fn resolve(recipe_path: Option<&Path>, os: Option<String>, json: bool) -> Result<()> {
    let recipe = load_recipe(recipe_path)?;
    let os = target_os(os);
    info!(os = %os, "resolving requirements");

    let resolved = recipe.resolve_requirements(&os);

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    println!(
        "{} requirement(s) for {} on {}:",
        resolved.len(),
        recipe.package.name,
        os
    );
    for req in &resolved {
        println!("  {}", req);
    }

    Ok(())
}

/// Emit the recipe's integration files into the output directory
pub fn generate(
    recipe_path: Option<&Path>,
    out_dir: &Path,
    os: Option<String>,
    build_type: Option<String>,
) -> Result<()> {
    let recipe = load_recipe(recipe_path)?;

    let os = target_os(os);
    let mut settings = BuildSettings::detect();
    settings.set(SettingsAxis::Os, os);
    if let Some(build_type) = build_type {
        settings.set(SettingsAxis::BuildType, build_type);
    }

    info!(settings = %settings, "generating integration files");
    let written = emit_all(&recipe, &settings, out_dir)
        .with_context(|| format!("Failed to generate into {}", out_dir.display()))?;

    for path in &written {
        println!("wrote {}", path.display());
    }
    if written.is_empty() {
        println!("Recipe declares no generators; nothing to do");
    }

    Ok(())
}

/// Validate a recipe file and report warnings
pub fn validate(recipe_path: &Path) -> Result<()> {
    let recipe = parse_recipe_file(recipe_path)
        .with_context(|| format!("Failed to load recipe from {}", recipe_path.display()))?;

    let warnings = validate_recipe(&recipe)?;

    if warnings.is_empty() {
        println!("{}: OK", recipe_path.display());
    } else {
        println!("{}: OK with {} warning(s)", recipe_path.display(), warnings.len());
        for warning in &warnings {
            println!("  warning: {}", warning);
        }
    }

    Ok(())
}

/// Generate shell completions on stdout
pub fn completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
