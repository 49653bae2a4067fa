// src/error.rs

//! Error types shared across the crate

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing, validating, or emitting recipes
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed recipe content, requirement string, or version pin
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Filesystem-level failure while reading or writing files
    #[error("I/O error: {0}")]
    IoError(String),

    /// Recipe content is well-formed but semantically invalid
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e.to_string())
    }
}
