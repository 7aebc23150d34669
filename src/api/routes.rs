//! Router construction and shared API state.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::secrets::StoreRegistry;

use super::docs;
use super::handlers::{
    get_config_value_handler, get_named_secret_handler, get_secret_key_handler,
    get_secret_object_handler, get_secret_string_handler, health_handler, list_stores_handler,
};

/// State shared by every handler: the immutable store registry and the local
/// configuration namespace as finalized during startup.
#[derive(Clone)]
pub struct ApiState {
    pub registry: Arc<StoreRegistry>,
    pub config_values: Arc<BTreeMap<String, String>>,
}

impl ApiState {
    pub fn new(registry: Arc<StoreRegistry>, config_values: BTreeMap<String, String>) -> Self {
        Self { registry, config_values: Arc::new(config_values) }
    }
}

/// Build the API router over the given state.
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/stores", get(list_stores_handler))
        .route("/api/v1/stores/{store}/secret", get(get_secret_string_handler))
        .route("/api/v1/stores/{store}/secret/object", get(get_secret_object_handler))
        .route("/api/v1/stores/{store}/secret/keys/{key}", get(get_secret_key_handler))
        .route("/api/v1/stores/{store}/secrets/{secret_id}", get(get_named_secret_handler))
        .route("/api/v1/config/{key}", get(get_config_value_handler))
        .merge(docs::docs_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
