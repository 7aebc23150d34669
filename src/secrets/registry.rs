//! Secret store registry.
//!
//! An immutable map from logical store name to a live client. Built once at
//! startup and handed by reference to whatever needs it; there is no global
//! state and no mutation after construction, so concurrent reads from many
//! request tasks need no synchronization.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::info;

use crate::config::StoreIdentitySettings;

use super::aws::AwsSecretsManagerStore;
use super::error::{Result, SecretsError};
use super::store::SecretStore;

/// Registry of secret store clients keyed by logical name.
pub struct StoreRegistry {
    stores: HashMap<String, Arc<dyn SecretStore>>,
}

impl std::fmt::Debug for StoreRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreRegistry")
            .field("stores", &self.stores.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl StoreRegistry {
    /// Build the registry from the full set of store identity settings.
    ///
    /// One AWS Secrets Manager client is constructed per entry. Any malformed
    /// entry fails the whole build; a registry is never partially populated.
    pub fn from_settings(settings: &BTreeMap<String, StoreIdentitySettings>) -> Result<Self> {
        let mut stores: HashMap<String, Arc<dyn SecretStore>> = HashMap::new();
        for (name, identity) in settings {
            let store = AwsSecretsManagerStore::new(name, identity)?;
            info!(store = %name, region = %identity.region, "Registered secret store");
            stores.insert(name.clone(), Arc::new(store));
        }
        Ok(Self { stores })
    }

    /// Assemble a registry from pre-built store clients.
    pub fn from_stores<I, S>(stores: I) -> Self
    where
        I: IntoIterator<Item = (S, Arc<dyn SecretStore>)>,
        S: Into<String>,
    {
        Self { stores: stores.into_iter().map(|(name, store)| (name.into(), store)).collect() }
    }

    /// Look up the client registered under `name`.
    ///
    /// An unknown name is a caller error, reported as `NotFound` rather than
    /// any silent default.
    pub fn get(&self, name: &str) -> Result<Arc<dyn SecretStore>> {
        self.stores.get(name).cloned().ok_or_else(|| SecretsError::not_found(name))
    }

    /// Registered logical store names, sorted.
    pub fn store_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.stores.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered stores.
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Returns true if no stores are registered.
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}
