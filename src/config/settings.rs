//! Configuration settings structures.
//!
//! Settings are loaded from environment variables (a `.env` file is honored in
//! `main`). Store identities keep their external configuration shape —
//! `{AccessKey, SecretKey, Region, SecretManagerName}` — via serde renames.

use serde::Deserialize;
use validator::Validate;

use crate::errors::{Error, Result};
use crate::secrets::{KeyRewrite, NameFilter, SecretString, DEFAULT_SEPARATOR};

/// One configured store identity: credentials, region/endpoint, and the
/// store-side secret name. Immutable once loaded.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct StoreIdentitySettings {
    /// Access key id for the store account.
    pub access_key: SecretString,

    /// Secret access key for the store account.
    pub secret_key: SecretString,

    /// Store region, e.g. `us-east-1`.
    #[validate(length(min = 1, message = "Region cannot be empty"))]
    pub region: String,

    /// The secret name this identity resolves by default.
    #[validate(length(min = 1, message = "SecretManagerName cannot be empty"))]
    pub secret_manager_name: String,

    /// Optional endpoint override for Secrets-Manager-compatible stores.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl StoreIdentitySettings {
    /// Validate the entry; returns the first problem as a plain reason.
    pub fn check(&self) -> std::result::Result<(), String> {
        Validate::validate(self).map_err(|err| err.to_string())?;
        if self.access_key.is_empty() {
            return Err("AccessKey cannot be empty".to_string());
        }
        if self.secret_key.is_empty() {
            return Err("SecretKey cannot be empty".to_string());
        }
        Ok(())
    }
}

/// HTTP API server configuration
#[derive(Debug, Clone)]
pub struct ApiServerConfig {
    pub bind_address: String,
    pub port: u16,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self { bind_address: "127.0.0.1".to_string(), port: 8080 }
    }
}

impl ApiServerConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let bind_address = std::env::var("KEYBRIDGE_API_BIND_ADDRESS")
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("KEYBRIDGE_API_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|err| Error::config(format!("Invalid API port: {}", err)))?;
        Ok(Self { bind_address, port })
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Tracing service name
    pub service_name: String,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Enable JSON structured logging
    pub json_logging: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "keybridge".to_string(),
            log_level: "info".to_string(),
            json_logging: false,
        }
    }
}

impl ObservabilityConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            service_name: std::env::var("KEYBRIDGE_SERVICE_NAME")
                .unwrap_or(defaults.service_name),
            log_level: std::env::var("KEYBRIDGE_LOG_LEVEL").unwrap_or(defaults.log_level),
            json_logging: std::env::var("KEYBRIDGE_JSON_LOGGING")
                .map(|v| v.trim().eq_ignore_ascii_case("true") || v.trim() == "1")
                .unwrap_or(defaults.json_logging),
        }
    }
}

/// Configuration-merge settings: which store feeds the local namespace and
/// how remote field paths are filtered and rewritten.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Logical name of the registry store the merge reads from.
    pub store: String,

    /// Only secrets whose names start with this prefix are merged.
    pub filter_prefix: Option<String>,

    /// Prefix stripped from rewritten keys.
    pub strip_prefix: Option<String>,

    /// Nested-key separator in raw field paths.
    pub separator: String,
}

impl MergeConfig {
    /// Create configuration from environment variables.
    ///
    /// The merge is enabled by setting `KEYBRIDGE_MERGE_STORE`; `None` means
    /// startup skips the merge entirely.
    pub fn from_env() -> Option<Self> {
        let store = std::env::var("KEYBRIDGE_MERGE_STORE").ok()?;
        Some(Self {
            store,
            filter_prefix: std::env::var("KEYBRIDGE_MERGE_FILTER_PREFIX").ok(),
            strip_prefix: std::env::var("KEYBRIDGE_MERGE_STRIP_PREFIX").ok(),
            separator: std::env::var("KEYBRIDGE_MERGE_SEPARATOR")
                .unwrap_or_else(|_| DEFAULT_SEPARATOR.to_string()),
        })
    }

    /// The name filter these settings describe.
    pub fn filter(&self) -> NameFilter {
        match &self.filter_prefix {
            Some(prefix) => NameFilter::Prefix(prefix.clone()),
            None => NameFilter::All,
        }
    }

    /// The key-rewrite rule these settings describe.
    pub fn rewrite(&self) -> KeyRewrite {
        let rewrite = KeyRewrite::new().with_separator(self.separator.clone());
        match &self.strip_prefix {
            Some(prefix) => rewrite.with_strip_prefix(prefix.clone()),
            None => rewrite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> StoreIdentitySettings {
        serde_json::from_str(
            r#"{
                "AccessKey": "AKIAEXAMPLE",
                "SecretKey": "wJalrXUtnFEMI",
                "Region": "us-east-1",
                "SecretManagerName": "app/db"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_identity_settings_external_shape() {
        let settings = identity();
        assert_eq!(settings.access_key.expose_secret(), "AKIAEXAMPLE");
        assert_eq!(settings.region, "us-east-1");
        assert_eq!(settings.secret_manager_name, "app/db");
        assert!(settings.endpoint.is_none());
        assert!(settings.check().is_ok());
    }

    #[test]
    fn test_identity_settings_validation() {
        let mut settings = identity();
        settings.region = String::new();
        assert!(settings.check().is_err());

        let mut settings = identity();
        settings.access_key = SecretString::new("");
        assert_eq!(settings.check().unwrap_err(), "AccessKey cannot be empty");
    }

    #[test]
    fn test_merge_config_filter_and_rewrite() {
        let config = MergeConfig {
            store: "Manager1".to_string(),
            filter_prefix: Some("App-".to_string()),
            strip_prefix: Some("App-:".to_string()),
            separator: DEFAULT_SEPARATOR.to_string(),
        };
        assert!(config.filter().matches("App-Settings"));
        assert!(!config.filter().matches("Other"));
        assert_eq!(config.rewrite().rewrite("A__B"), "A:B");
    }
}
