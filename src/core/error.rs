//! Error types and error handling for shorts-creator.
//!
//! This module defines the error types used throughout the
//! application. The chunking algorithm itself never fails; errors
//! come from configuration, invocation, file I/O and the remote
//! channel API.

use thiserror::Error;

/// Result type alias for shorts-creator operations
pub type Result<T> = std::result::Result<T, ShortsError>;

/// Main error type for shorts-creator
#[derive(Error, Debug)]
pub enum ShortsError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid invocation: {0}")]
    Usage(String),

    #[error("Invalid channel reference: {0}")]
    InvalidChannel(String),

    #[error("No channel found for '{0}'")]
    ChannelNotFound(String),

    #[error("Uploads playlist not found for channel {0}")]
    UploadsPlaylistMissing(String),

    #[error("API request failed with status {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ShortsError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error was caused by how the tool was invoked
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ShortsError::Usage(_) | ShortsError::ConfigError(_) | ShortsError::InvalidChannel(_)
        )
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ShortsError::ChannelNotFound(_) | ShortsError::UploadsPlaylistMissing(_)
        )
    }

    /// Process exit code for this error
    ///
    /// Usage problems exit with 2, a missing channel with 3 and a
    /// channel without an uploads playlist with 4. Everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShortsError::ChannelNotFound(_) => 3,
            ShortsError::UploadsPlaylistMissing(_) => 4,
            e if e.is_usage() => 2,
            _ => 1,
        }
    }
}
