//! Error types for inkframe
//!
//! Theme resolution itself never fails; these errors come from setup work
//! (parsing config and palette files, validating colors) and from the
//! preference store when it is used directly.

use crate::storage::StorageError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for inkframe operations
pub type InkResult<T> = Result<T, InkError>;

/// Main error type for inkframe
#[derive(Debug, Error)]
pub enum InkError {
    /// A color string that is not `#rgb` or `#rrggbb`
    #[error("Invalid color value: '{0}'")]
    InvalidColor(String),

    /// A palette definition without an entry for every role
    #[error("Palette '{palette}' is missing role '{role}'")]
    MissingRole { palette: String, role: String },

    #[error("Unknown color role: '{0}'")]
    UnknownRole(String),

    #[error("Invalid theme mode: '{0}' (expected 'dark' or 'light')")]
    InvalidMode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl InkError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an IO error tied to the file that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn missing_role(palette: &str, role: impl std::fmt::Display) -> Self {
        Self::MissingRole {
            palette: palette.to_string(),
            role: role.to_string(),
        }
    }
}
