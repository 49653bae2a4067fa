// src/cli.rs
//! CLI definitions for prepcard
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prepcard")]
#[command(author = "Prepcard Project")]
#[command(version)]
#[command(about = "Inspect, resolve, and generate from declarative build recipes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a recipe's declared contract
    Show {
        /// Path to a recipe file (default: the built-in bgfx demo recipe)
        #[arg(short, long)]
        recipe: Option<PathBuf>,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Resolve the effective requirement set for a target operating system
    Resolve {
        /// Path to a recipe file (default: the built-in bgfx demo recipe)
        #[arg(short, long)]
        recipe: Option<PathBuf>,

        /// Target operating system (default: detected from the host)
        #[arg(long)]
        os: Option<String>,

        /// Emit machine-readable JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Emit the recipe's build-system integration files
    Generate {
        /// Path to a recipe file (default: the built-in bgfx demo recipe)
        #[arg(short, long)]
        recipe: Option<PathBuf>,

        /// Output directory for generated files
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Target operating system (default: detected from the host)
        #[arg(long)]
        os: Option<String>,

        /// Build type to cache in the toolchain file
        #[arg(long)]
        build_type: Option<String>,
    },

    /// Validate a recipe file and report warnings
    Validate {
        /// Path to the recipe file
        recipe: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
