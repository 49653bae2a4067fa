// src/lib.rs

//! Prepcard: declarative build-recipe descriptors
//!
//! A recipe is the data contract a package handles to its package manager:
//! which build settings axes matter, which third-party libraries are
//! required at which pinned versions, which extra requirements apply on
//! specific platforms, and which build-system integration files to emit.
//!
//! # Architecture
//!
//! - Descriptors are immutable data; the one operation is
//!   [`Recipe::resolve_requirements`], a pure, total function from the
//!   target operating system to the effective requirement set
//! - Settings axes are declared by the recipe, valued by the consuming tool
//! - Requirements pin exact versions: releases (`9.1.0`) or dated snapshots
//!   (`cci.20230113`)
//! - Generators render the declared integration files deterministically

mod error;
pub mod generator;
pub mod recipe;
pub mod requirement;
pub mod settings;
pub mod version;

pub use error::{Error, Result};
pub use generator::{emit_all, Generator};
pub use recipe::{parse_recipe, parse_recipe_file, validate_recipe, Recipe};
pub use requirement::Requirement;
pub use settings::{platform_name, BuildSettings, SettingsAxis};
pub use version::VersionPin;
