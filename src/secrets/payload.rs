//! Raw secret payloads as returned by a store fetch.

use std::fmt;

use super::error::{Result, SecretsError};

/// The result of one secret fetch: either UTF-8 text or a binary blob.
///
/// Exactly one form is populated per fetch; a response carrying neither is
/// rejected as [`SecretsError::EmptyPayload`] at construction, so this type
/// never represents "both empty". Extractors must handle both forms.
#[derive(Clone, PartialEq, Eq)]
pub enum RawSecretPayload {
    /// UTF-8 string payload.
    Text(String),
    /// Binary payload; interpreted as UTF-8 text where a text form is required.
    Binary(Vec<u8>),
}

impl RawSecretPayload {
    /// Build a payload from the optional string/binary fields of a store
    /// response. The string form wins when a store reports both.
    pub fn from_parts(
        secret_id: &str,
        text: Option<String>,
        binary: Option<Vec<u8>>,
    ) -> Result<Self> {
        match (text, binary) {
            (Some(text), _) if !text.is_empty() => Ok(Self::Text(text)),
            (_, Some(binary)) if !binary.is_empty() => Ok(Self::Binary(binary)),
            _ => Err(SecretsError::empty_payload(secret_id)),
        }
    }

    /// The text form, if this payload has one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }

    /// Payload size in bytes, without exposing the contents.
    pub fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Binary(bytes) => bytes.len(),
        }
    }

    /// Returns true if the payload holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for RawSecretPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Payload contents are secret material; only the form and size are shown.
        match self {
            Self::Text(text) => write!(f, "RawSecretPayload::Text([REDACTED; {} bytes])", text.len()),
            Self::Binary(bytes) => {
                write!(f, "RawSecretPayload::Binary([REDACTED; {} bytes])", bytes.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_prefers_text() {
        let payload =
            RawSecretPayload::from_parts("s", Some("hello".into()), Some(vec![1, 2])).unwrap();
        assert_eq!(payload, RawSecretPayload::Text("hello".into()));
    }

    #[test]
    fn test_from_parts_falls_back_to_binary() {
        let payload = RawSecretPayload::from_parts("s", None, Some(vec![104, 105])).unwrap();
        assert_eq!(payload, RawSecretPayload::Binary(vec![104, 105]));
    }

    #[test]
    fn test_from_parts_rejects_empty_response() {
        let err = RawSecretPayload::from_parts("app/db", None, None).unwrap_err();
        assert!(matches!(err, SecretsError::EmptyPayload { ref name } if name == "app/db"));

        let err =
            RawSecretPayload::from_parts("app/db", Some(String::new()), Some(vec![])).unwrap_err();
        assert!(matches!(err, SecretsError::EmptyPayload { .. }));
    }

    #[test]
    fn test_debug_is_redacted() {
        let payload = RawSecretPayload::Text("hunter2".into());
        let debug = format!("{:?}", payload);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("7 bytes"));
    }
}
