//! # Error Handling
//!
//! Top-level error type for the keybridge service. Secret-resolution failures
//! carry their own taxonomy in [`crate::secrets::SecretsError`] and are wrapped
//! transparently here.

use crate::secrets::SecretsError;

/// Custom result type for keybridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the keybridge service
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network transport errors (HTTP server)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Secret resolution errors
    #[error(transparent)]
    Secrets(#[from] SecretsError),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
