//! Configuration merge from a secret store.
//!
//! A one-time startup source that pulls a filtered set of secrets from a
//! designated store, flattens each secret's JSON object into field paths,
//! rewrites the paths into local configuration keys, and overlays the result
//! onto the local key-value namespace. Any single fetch or parse failure
//! aborts the whole load; running with partial configuration is unsafe.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use super::error::{Result, SecretsError};
use super::store::SecretStore;

/// Nested-key separator used in raw field paths.
pub const DEFAULT_SEPARATOR: &str = "__";

/// Predicate over candidate secret names; only matching secrets are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    /// Every candidate matches.
    All,
    /// Only names starting with the given prefix match.
    Prefix(String),
}

impl NameFilter {
    /// Returns true when `name` passes the filter.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Prefix(prefix) => name.starts_with(prefix.as_str()),
        }
    }
}

/// Deterministic rewrite from a raw field path to a local configuration key.
///
/// Every occurrence of the separator becomes the configuration-hierarchy
/// separator `:`, then an optional store-side prefix is stripped from the
/// front. Pure and side-effect-free; the same input always yields the same
/// key.
#[derive(Debug, Clone)]
pub struct KeyRewrite {
    separator: String,
    strip_prefix: Option<String>,
}

impl Default for KeyRewrite {
    fn default() -> Self {
        Self { separator: DEFAULT_SEPARATOR.to_string(), strip_prefix: None }
    }
}

impl KeyRewrite {
    /// Rewrite rule with the default `__` separator and no prefix stripping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom nested-key separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Strip `prefix` from the front of rewritten keys when present.
    pub fn with_strip_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.strip_prefix = Some(prefix.into());
        self
    }

    /// The nested-key separator raw field paths are joined with.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Map a raw field path to its local configuration key.
    pub fn rewrite(&self, raw_key: &str) -> String {
        let key = raw_key.replace(self.separator.as_str(), ":");
        match &self.strip_prefix {
            Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                Some(stripped) => stripped.to_string(),
                None => key,
            },
            None => key,
        }
    }
}

/// Startup-time configuration source backed by one secret store.
pub struct ConfigMergeProvider {
    store: Arc<dyn SecretStore>,
    filter: NameFilter,
    rewrite: KeyRewrite,
}

impl std::fmt::Debug for ConfigMergeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigMergeProvider")
            .field("filter", &self.filter)
            .field("rewrite", &self.rewrite)
            .finish()
    }
}

impl ConfigMergeProvider {
    /// Create a provider over `store` with the given filter and rewrite rule.
    pub fn new(store: Arc<dyn SecretStore>, filter: NameFilter, rewrite: KeyRewrite) -> Self {
        Self { store, filter, rewrite }
    }

    /// Fetch, flatten, and rewrite every matching secret into a flat mapping.
    ///
    /// Candidate names come from the store's enumeration API and are sorted
    /// lexicographically after filtering, so key collisions between secrets
    /// resolve last-write-wins in a deterministic order. Each retained
    /// secret's text form must parse as a JSON object.
    pub async fn load(&self) -> Result<BTreeMap<String, String>> {
        let mut names: Vec<String> = self
            .store
            .list_secret_names()
            .await?
            .into_iter()
            .filter(|name| self.filter.matches(name))
            .collect();
        names.sort();

        let mut merged = BTreeMap::new();
        for name in &names {
            let payload = self.store.get_secret_value(name).await?;
            let text = payload.text().ok_or_else(|| {
                SecretsError::not_json(format!("secret '{}' has no text form", name))
            })?;
            let value: Value = serde_json::from_str(text)
                .map_err(|err| SecretsError::not_json(format!("secret '{}': {}", name, err)))?;
            let object = value.as_object().ok_or_else(|| {
                SecretsError::not_json(format!("secret '{}' is not a JSON object", name))
            })?;

            let mut fields = Vec::new();
            for (key, leaf) in object {
                flatten_value(key.clone(), leaf, self.rewrite.separator(), &mut fields);
            }
            debug!(secret = %name, fields = fields.len(), "Flattened secret into field paths");

            for (raw_key, leaf) in fields {
                merged.insert(self.rewrite.rewrite(&raw_key), leaf);
            }
        }

        info!(
            secrets = names.len(),
            keys = merged.len(),
            "Loaded configuration from secret store"
        );
        Ok(merged)
    }

    /// Load and overlay onto `target`; remote values overwrite local entries.
    pub async fn merge_into(&self, target: &mut BTreeMap<String, String>) -> Result<()> {
        for (key, value) in self.load().await? {
            target.insert(key, value);
        }
        Ok(())
    }
}

/// Flatten a JSON value into `(path, text)` leaves.
///
/// Nested objects extend the path with the separator; arrays flatten by
/// index. String leaves surface unquoted, other scalars as canonical JSON
/// text, and null as an empty string so a remote null still overrides a
/// local entry.
fn flatten_value(path: String, value: &Value, separator: &str, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_value(format!("{path}{separator}{key}"), nested, separator, out);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten_value(format!("{path}{separator}{index}"), nested, separator, out);
            }
        }
        Value::Null => out.push((path, String::new())),
        Value::String(text) => out.push((path, text.clone())),
        other => out.push((path, other.to_string())),
    }
}
