//! Error types for codeprint
//!
//! The rendering engine itself is total. Errors only come from loading or
//! saving configuration and preset files, and from strict style-spec parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for codeprint operations
pub type Result<T> = std::result::Result<T, CodeprintError>;

/// Codeprint error types
#[derive(Error, Debug)]
pub enum CodeprintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Could not write TOML: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("Invalid base64 style: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid preset file {path}: {reason}")]
    InvalidPreset { path: PathBuf, reason: String },

    #[error("Unsupported preset format: {0} (expected .toml or .json)")]
    UnsupportedPresetFormat(PathBuf),

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("{0}")]
    Message(String),
}
