//! # Theme Error Types
//!
//! Theme resolution itself cannot fail: every token carries both mode variants
//! and every palette is generated from the same field list as its tokens. The
//! errors below only cover the edges of the crate, namely parsing colors and
//! modes from text and loading style configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the theming system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A color string is not a `#rrggbb` or `#rrggbbaa` hex value.
    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    /// A mode name is neither `light` nor `dark`.
    #[error("Unknown theme mode '{0}' (expected 'light' or 'dark')")]
    UnknownMode(String),

    /// Style configuration file was not found.
    #[error("Style configuration file not found: {path:?}")]
    ConfigNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Style configuration file could not be read.
    #[error("Failed to read style configuration {path:?}: {source}")]
    ConfigRead {
        /// The path of the file that failed to read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a style configuration file.
    #[error("Failed to parse style configuration {path:?}: {details}")]
    ConfigParse {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// Style configuration file has an extension other than `.toml`.
    #[error("Unsupported configuration file format {path:?}. Use .toml")]
    UnsupportedConfigFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// Error serializing a theme snapshot.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor(value.into())
    }

    /// Create a config parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            details: details.into(),
        }
    }
}
