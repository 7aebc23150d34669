//! HTTP handlers: thin adapters from endpoints to the secret resolution core.
//!
//! Each handler maps one core operation to one endpoint and returns the
//! result as a JSON body; failures are translated by [`ApiError`].

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::secrets::extract;

use super::error::ApiError;
use super::routes::ApiState;

/// Liveness response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Registered logical store names
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreListResponse {
    pub stores: Vec<String>,
}

/// A secret resolved to its opaque string form
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretStringResponse {
    pub store: String,
    pub secret_id: String,
    pub value: String,
}

/// A single key-value pair extracted from a JSON secret
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyedValueResponse {
    pub key: String,
    pub value: String,
}

/// A value from the local configuration namespace
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValueResponse {
    pub key: String,
    pub value: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is live", body = HealthResponse)),
    tag = "health"
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[utoipa::path(
    get,
    path = "/api/v1/stores",
    responses((status = 200, description = "Registered store names", body = StoreListResponse)),
    tag = "stores"
)]
#[instrument(skip(state))]
pub async fn list_stores_handler(State(state): State<ApiState>) -> Json<StoreListResponse> {
    Json(StoreListResponse { stores: state.registry.store_names() })
}

#[utoipa::path(
    get,
    path = "/api/v1/stores/{store}/secret",
    params(("store" = String, Path, description = "Logical store name")),
    responses(
        (status = 200, description = "Default secret as an opaque string", body = SecretStringResponse),
        (status = 404, description = "Unknown store name"),
        (status = 500, description = "Resolution failure")
    ),
    tag = "secrets"
)]
#[instrument(skip(state), fields(store = %store))]
pub async fn get_secret_string_handler(
    State(state): State<ApiState>,
    Path(store): Path<String>,
) -> Result<Json<SecretStringResponse>, ApiError> {
    let client = state.registry.get(&store)?;
    let secret_id = client.default_secret().to_string();
    let payload = client.get_secret_value(&secret_id).await?;
    let value = extract::as_string(&payload)?;
    Ok(Json(SecretStringResponse { store, secret_id, value }))
}

#[utoipa::path(
    get,
    path = "/api/v1/stores/{store}/secret/object",
    params(("store" = String, Path, description = "Logical store name")),
    responses(
        (status = 200, description = "Default secret deserialized as a JSON object"),
        (status = 404, description = "Unknown store name"),
        (status = 500, description = "Payload is not a JSON object")
    ),
    tag = "secrets"
)]
#[instrument(skip(state), fields(store = %store))]
pub async fn get_secret_object_handler(
    State(state): State<ApiState>,
    Path(store): Path<String>,
) -> Result<Json<serde_json::Map<String, serde_json::Value>>, ApiError> {
    let client = state.registry.get(&store)?;
    let payload = client.get_secret_value(client.default_secret()).await?;
    let object = extract::as_typed_object(&payload)?;
    Ok(Json(object))
}

#[utoipa::path(
    get,
    path = "/api/v1/stores/{store}/secret/keys/{key}",
    params(
        ("store" = String, Path, description = "Logical store name"),
        ("key" = String, Path, description = "Top-level field of the JSON secret")
    ),
    responses(
        (status = 200, description = "The extracted key-value pair", body = KeyedValueResponse),
        (status = 404, description = "Unknown store name or missing key"),
        (status = 500, description = "Resolution failure")
    ),
    tag = "secrets"
)]
#[instrument(skip(state), fields(store = %store, key = %key))]
pub async fn get_secret_key_handler(
    State(state): State<ApiState>,
    Path((store, key)): Path<(String, String)>,
) -> Result<Json<KeyedValueResponse>, ApiError> {
    let client = state.registry.get(&store)?;
    let payload = client.get_secret_value(client.default_secret()).await?;
    let value = extract::as_keyed_value(&payload, &key)?;
    Ok(Json(KeyedValueResponse { key, value }))
}

#[utoipa::path(
    get,
    path = "/api/v1/stores/{store}/secrets/{secret_id}",
    params(
        ("store" = String, Path, description = "Logical store name"),
        ("secret_id" = String, Path, description = "Secret identifier within the store")
    ),
    responses(
        (status = 200, description = "Named secret as an opaque string", body = SecretStringResponse),
        (status = 404, description = "Unknown store name or secret identifier"),
        (status = 500, description = "Resolution failure")
    ),
    tag = "secrets"
)]
#[instrument(skip(state), fields(store = %store, secret_id = %secret_id))]
pub async fn get_named_secret_handler(
    State(state): State<ApiState>,
    Path((store, secret_id)): Path<(String, String)>,
) -> Result<Json<SecretStringResponse>, ApiError> {
    let client = state.registry.get(&store)?;
    let payload = client.get_secret_value(&secret_id).await?;
    let value = extract::as_string(&payload)?;
    Ok(Json(SecretStringResponse { store, secret_id, value }))
}

#[utoipa::path(
    get,
    path = "/api/v1/config/{key}",
    params(("key" = String, Path, description = "Local configuration key")),
    responses(
        (status = 200, description = "The configuration value", body = ConfigValueResponse),
        (status = 404, description = "Key absent from the local namespace")
    ),
    tag = "config"
)]
#[instrument(skip(state), fields(key = %key))]
pub async fn get_config_value_handler(
    State(state): State<ApiState>,
    Path(key): Path<String>,
) -> Result<Json<ConfigValueResponse>, ApiError> {
    match state.config_values.get(&key) {
        Some(value) => Ok(Json(ConfigValueResponse { key, value: value.clone() })),
        None => Err(ApiError::NotFound(format!("Configuration value not found: {}", key))),
    }
}
