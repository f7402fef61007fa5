//! # UI Error Types
//!
//! Compositing, hit-testing and dispatch never fail: "nothing under the
//! pointer" is `None`, not an error. The fallible surface is configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating compositor configuration.
#[derive(Error, Debug)]
pub enum UiError {
    /// The configuration file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML or does not match the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value parsed but is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
