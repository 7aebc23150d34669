//! Payload extraction strategies.
//!
//! Three independent pure functions over a fetched [`RawSecretPayload`]:
//! opaque string, caller-typed object, and single keyed value. Each call is
//! self-contained; no state is shared between calls.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{Result, SecretsError};
use super::payload::RawSecretPayload;

/// Return the payload as an opaque string.
///
/// The text form is returned verbatim; a binary payload is decoded as UTF-8
/// text. Invalid UTF-8 fails with `DecodeError`.
pub fn as_string(payload: &RawSecretPayload) -> Result<String> {
    match payload {
        RawSecretPayload::Text(text) => Ok(text.clone()),
        RawSecretPayload::Binary(bytes) => String::from_utf8(bytes.clone())
            .map_err(|err| SecretsError::decode_error(err.to_string())),
    }
}

/// Deserialize the payload, interpreted as JSON, into a caller-chosen shape.
///
/// Only text payloads are supported on this path; a binary-only payload fails
/// with `NotJson`. Parse or shape mismatches fail with `DeserializationError`
/// and never yield a partially populated value.
pub fn as_typed_object<T: DeserializeOwned>(payload: &RawSecretPayload) -> Result<T> {
    let text = payload
        .text()
        .ok_or_else(|| SecretsError::not_json("payload has no text form"))?;
    serde_json::from_str(text).map_err(|err| SecretsError::deserialization(err.to_string()))
}

/// Extract a single top-level field from the payload, interpreted as a JSON
/// object.
///
/// A string field is returned unquoted; any other JSON value is returned as
/// its canonical JSON text. An absent key, or a key whose value is null,
/// fails with `KeyNotFound` carrying the key name.
pub fn as_keyed_value(payload: &RawSecretPayload, key: &str) -> Result<String> {
    let text = payload
        .text()
        .ok_or_else(|| SecretsError::not_json("payload has no text form"))?;
    let value: Value = serde_json::from_str(text)
        .map_err(|err| SecretsError::not_json(err.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| SecretsError::not_json("top-level value is not an object"))?;

    match object.get(key) {
        None | Some(Value::Null) => Err(SecretsError::key_not_found(key)),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Ok(other.to_string()),
    }
}
