//! Multi-store secret resolution.
//!
//! This module is the core of the service: a registry of independently
//! configured secret store clients, extraction strategies that turn a raw
//! payload into a string, a typed object, or a single keyed value, and a
//! configuration-merge provider that pulls filtered, renamed secret fields
//! into the local configuration namespace at startup.
//!
//! # Architecture
//!
//! Store clients implement the [`SecretStore`] trait and live behind the
//! [`StoreRegistry`], an immutable name-to-client map built once from
//! settings. Fetches are single round trips with no retries; every failure
//! mode is a structured [`SecretsError`] variant. The extractors in
//! [`extract`] are pure functions over a fetched [`RawSecretPayload`].
//!
//! ```rust,ignore
//! use keybridge::secrets::{extract, StoreRegistry};
//!
//! let registry = StoreRegistry::from_settings(&settings)?;
//! let store = registry.get("Manager1")?;
//! let payload = store.get_secret_value(store.default_secret()).await?;
//! let host = extract::as_keyed_value(&payload, "host")?;
//! ```

pub mod aws;
pub mod error;
pub mod extract;
pub mod memory;
pub mod merge;
pub mod payload;
pub mod registry;
pub mod store;
pub mod types;

// Re-export main types
pub use aws::AwsSecretsManagerStore;
pub use error::{Result, SecretsError};
pub use memory::InMemorySecretStore;
pub use merge::{ConfigMergeProvider, KeyRewrite, NameFilter, DEFAULT_SEPARATOR};
pub use payload::RawSecretPayload;
pub use registry::StoreRegistry;
pub use store::SecretStore;
pub use types::SecretString;
