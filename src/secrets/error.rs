//! Error types for secret resolution.
//!
//! Every failure mode is a discriminated variant; callers match on kinds,
//! never on message text. `KeyNotFound` carries the missing key name because
//! the API layer surfaces it in caller-visible diagnostics.

use thiserror::Error;

/// Result type for secret resolution operations.
pub type Result<T> = std::result::Result<T, SecretsError>;

/// Errors that can occur while resolving secrets.
#[derive(Error, Debug)]
pub enum SecretsError {
    /// Registry name or secret identifier absent.
    #[error("Secret not found: {name}")]
    NotFound { name: String },

    /// The store rejected the configured credentials.
    #[error("Access denied by secret store: {message}")]
    Unauthorized { message: String },

    /// Transport or service-side failure, including timeouts.
    #[error("Secret store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// A fetch succeeded but carried neither a string nor a binary payload.
    #[error("Secret '{name}' returned an empty payload")]
    EmptyPayload { name: String },

    /// A binary payload was not valid UTF-8 text.
    #[error("Secret payload is not valid UTF-8: {message}")]
    DecodeError { message: String },

    /// The payload has no text form or is not a JSON document/object.
    #[error("Secret is not in JSON format: {message}")]
    NotJson { message: String },

    /// The payload parsed as JSON but did not match the requested shape.
    #[error("Failed to deserialize secret payload: {message}")]
    DeserializationError { message: String },

    /// A requested top-level field is absent (or null) in the secret object.
    #[error("The key '{key}' is missing in the secret")]
    KeyNotFound { key: String },

    /// A store identity entry could not be turned into a client.
    #[error("Invalid settings for store '{name}': {reason}")]
    InvalidSettings { name: String, reason: String },
}

impl SecretsError {
    /// Create a not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized { message: message.into() }
    }

    /// Create a store unavailable error.
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable { message: message.into() }
    }

    /// Create an empty payload error.
    pub fn empty_payload(name: impl Into<String>) -> Self {
        Self::EmptyPayload { name: name.into() }
    }

    /// Create a decode error.
    pub fn decode_error(message: impl Into<String>) -> Self {
        Self::DecodeError { message: message.into() }
    }

    /// Create a not-JSON error.
    pub fn not_json(message: impl Into<String>) -> Self {
        Self::NotJson { message: message.into() }
    }

    /// Create a deserialization error.
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::DeserializationError { message: message.into() }
    }

    /// Create a key-not-found error carrying the missing key name.
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create an invalid settings error.
    pub fn invalid_settings(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSettings { name: name.into(), reason: reason.into() }
    }
}
