//! # Configuration Management
//!
//! Environment-driven configuration for the keybridge service, plus the local
//! key-value configuration namespace the merge provider populates during
//! startup.
//!
//! Store identities are supplied as a JSON object in `KEYBRIDGE_STORES`,
//! keyed by logical store name:
//!
//! ```json
//! {
//!   "Manager1": {
//!     "AccessKey": "...",
//!     "SecretKey": "...",
//!     "Region": "us-east-1",
//!     "SecretManagerName": "app/db"
//!   }
//! }
//! ```
//!
//! Local configuration values can be seeded from `KEYBRIDGE_LOCAL_VALUES`
//! (a flat JSON object); values merged from the remote store override them.

pub mod settings;

pub use settings::{ApiServerConfig, MergeConfig, ObservabilityConfig, StoreIdentitySettings};

use std::collections::BTreeMap;

use crate::errors::{Error, Result};

/// Full application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// HTTP API server settings.
    pub api: ApiServerConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Store identity settings keyed by logical store name.
    pub stores: BTreeMap<String, StoreIdentitySettings>,

    /// Optional configuration-merge settings; `None` disables the merge.
    pub merge: Option<MergeConfig>,

    /// The local key-value configuration namespace.
    pub values: BTreeMap<String, String>,
}

impl Config {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let stores = match std::env::var("KEYBRIDGE_STORES") {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|err| Error::config(format!("Invalid KEYBRIDGE_STORES: {}", err)))?,
            Err(_) => BTreeMap::new(),
        };

        let values = match std::env::var("KEYBRIDGE_LOCAL_VALUES") {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|err| Error::config(format!("Invalid KEYBRIDGE_LOCAL_VALUES: {}", err)))?,
            Err(_) => BTreeMap::new(),
        };

        Ok(Self {
            api: ApiServerConfig::from_env()?,
            observability: ObservabilityConfig::from_env(),
            stores,
            merge: MergeConfig::from_env(),
            values,
        })
    }

    /// Read a value from the local configuration namespace.
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
