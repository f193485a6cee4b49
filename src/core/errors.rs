//! Shared error types for the application
//!
//! The calculation engine itself is infallible: malformed numbers degrade to
//! defaults and empty inputs produce neutral metrics. These errors only arise
//! at the edges (reading files, parsing configuration, decoding input
//! documents).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for roimap operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input document does not have the expected shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether the user can fix this by editing their files
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::InvalidInput(_) | Self::Json(_) | Self::Toml(_)
        )
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
