//! Startup sequence for the keybridge service.
//!
//! Startup is an explicit two-phase process:
//!
//! 1. Build the store registry and run the configuration merge synchronously.
//!    Any failure here prevents the process from reaching a serving state;
//!    serving with partial configuration is judged unsafe.
//! 2. Only then construct the API state and start the HTTP server.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{start_api_server, ApiState};
use crate::config::{Config, MergeConfig};
use crate::errors::Result;
use crate::secrets::{ConfigMergeProvider, StoreRegistry};

/// Everything phase 1 produces: the immutable registry and the finalized
/// local configuration namespace.
pub struct BootstrappedCore {
    pub registry: Arc<StoreRegistry>,
    pub values: BTreeMap<String, String>,
}

/// Run the configuration merge against a registry store, overlaying remote
/// values onto `values` (remote takes precedence).
pub async fn merge_configuration(
    registry: &StoreRegistry,
    merge: &MergeConfig,
    values: &mut BTreeMap<String, String>,
) -> crate::secrets::Result<()> {
    let store = registry.get(&merge.store)?;
    let provider = ConfigMergeProvider::new(store, merge.filter(), merge.rewrite());
    provider.merge_into(values).await
}

/// Phase 1: build the registry from settings and merge remote configuration.
pub async fn bootstrap(config: &Config) -> Result<BootstrappedCore> {
    let registry = Arc::new(StoreRegistry::from_settings(&config.stores)?);
    if registry.is_empty() {
        warn!("No secret stores configured");
    }

    let mut values = config.values.clone();
    if let Some(merge) = &config.merge {
        merge_configuration(&registry, merge, &mut values).await?;
        info!(store = %merge.store, keys = values.len(), "Merged remote secrets into local configuration");
    }

    Ok(BootstrappedCore { registry, values })
}

/// Run both phases: bootstrap, then serve until shutdown.
pub async fn run(config: Config) -> Result<()> {
    let core = bootstrap(&config).await?;
    let state = ApiState::new(core.registry, core.values);
    start_api_server(config.api.clone(), state).await
}
