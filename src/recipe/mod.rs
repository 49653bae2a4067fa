// src/recipe/mod.rs

//! Recipe descriptors for the consuming package manager
//!
//! A recipe is the declarative contract handed to a package manager. It
//! declares:
//! - The build settings axes the tool should key its configuration cache on
//! - Required third-party libraries with pinned versions
//! - Extra requirements that apply only on specific target platforms
//! - The build-system integration files ("generators") to emit
//!
//! The recipe never resolves packages, never fetches anything, and never
//! populates settings values. Its one piece of logic is
//! [`Recipe::resolve_requirements`], a pure function from the target
//! operating system to the effective requirement set.
//!
//! # Example Recipe
//!
//! ```toml
//! [package]
//! name = "bgfx-demo"
//! version = "1.0.0"
//!
//! [build]
//! settings = ["os", "compiler", "build_type", "arch"]
//! requires = ["fmt/9.1.0", "glm/cci.20230113"]
//! generators = ["CMakeDeps", "CMakeToolchain"]
//!
//! [platform.Linux]
//! requires = ["wayland/1.21.0"]
//! ```

mod format;
pub mod parser;

pub use format::{BuildSection, PackageSection, PlatformSection, Recipe};
pub use parser::{parse_recipe, parse_recipe_file, validate_recipe};
