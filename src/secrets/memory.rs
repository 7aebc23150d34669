//! In-memory secret store for tests and local development.

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::error::{Result, SecretsError};
use super::payload::RawSecretPayload;
use super::store::SecretStore;

/// A deterministic in-process store.
///
/// Holds named payloads in memory and answers fetches without any I/O.
/// Registered in place of a remote store wherever tests or local development
/// need reproducible contents.
#[derive(Debug, Default)]
pub struct InMemorySecretStore {
    default_secret: String,
    secrets: BTreeMap<String, RawSecretPayload>,
}

impl InMemorySecretStore {
    /// Create an empty store whose default secret name is `default_secret`.
    pub fn new(default_secret: impl Into<String>) -> Self {
        Self { default_secret: default_secret.into(), secrets: BTreeMap::new() }
    }

    /// Add a text secret.
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(name.into(), RawSecretPayload::Text(value.into()));
        self
    }

    /// Add a binary secret.
    pub fn with_binary(mut self, name: impl Into<String>, value: Vec<u8>) -> Self {
        self.secrets.insert(name.into(), RawSecretPayload::Binary(value));
        self
    }

    /// Number of secrets held.
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    /// Returns true if the store holds no secrets.
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

#[async_trait]
impl SecretStore for InMemorySecretStore {
    async fn get_secret_value(&self, secret_id: &str) -> Result<RawSecretPayload> {
        self.secrets
            .get(secret_id)
            .cloned()
            .ok_or_else(|| SecretsError::not_found(secret_id))
    }

    async fn list_secret_names(&self) -> Result<Vec<String>> {
        Ok(self.secrets.keys().cloned().collect())
    }

    fn default_secret(&self) -> &str {
        &self.default_secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_stored_payload() {
        let store = InMemorySecretStore::new("app/db").with_text("app/db", "{\"host\":\"db1\"}");
        let payload = store.get_secret_value("app/db").await.unwrap();
        assert_eq!(payload.text(), Some("{\"host\":\"db1\"}"));
    }

    #[tokio::test]
    async fn test_fetch_of_unknown_secret_is_not_found() {
        let store = InMemorySecretStore::new("app/db");
        let err = store.get_secret_value("nope").await.unwrap_err();
        assert!(matches!(err, SecretsError::NotFound { ref name } if name == "nope"));
    }

    #[tokio::test]
    async fn test_list_is_sorted() {
        let store = InMemorySecretStore::new("a")
            .with_text("b", "2")
            .with_text("a", "1")
            .with_binary("c", vec![3]);
        assert_eq!(store.list_secret_names().await.unwrap(), vec!["a", "b", "c"]);
    }
}
