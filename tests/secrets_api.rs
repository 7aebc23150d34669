//! End-to-end tests for the HTTP API over in-memory stores.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use keybridge::api::{build_router, ApiState};
use keybridge::secrets::{InMemorySecretStore, SecretStore, StoreRegistry};

fn test_router() -> Router {
    let manager1: Arc<dyn SecretStore> = Arc::new(
        InMemorySecretStore::new("app/db")
            .with_text("app/db", r#"{"host":"db1","port":"5432"}"#)
            .with_text("app/api-key", "plain-token"),
    );
    let manager2: Arc<dyn SecretStore> = Arc::new(
        InMemorySecretStore::new("billing/credentials")
            .with_text("billing/credentials", r#"{"user":"svc","password":"p1"}"#),
    );
    let manager3: Arc<dyn SecretStore> =
        Arc::new(InMemorySecretStore::new("empty/default"));

    let registry = StoreRegistry::from_stores([
        ("Manager1".to_string(), manager1),
        ("Manager2".to_string(), manager2),
        ("Manager3".to_string(), manager3),
    ]);

    let values = BTreeMap::from([
        ("Say:MyName".to_string(), "Heisenberg".to_string()),
        ("ConnectionString:MySQLDBCloud".to_string(), "Server=db;Uid=app".to_string()),
    ]);

    build_router(ApiState::new(Arc::new(registry), values))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = get(test_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn stores_lists_registered_names_sorted() {
    let (status, body) = get(test_router(), "/api/v1/stores").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["stores"],
        serde_json::json!(["Manager1", "Manager2", "Manager3"])
    );
}

#[tokio::test]
async fn default_secret_resolves_as_string() {
    let (status, body) = get(test_router(), "/api/v1/stores/Manager1/secret").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "Manager1");
    assert_eq!(body["secretId"], "app/db");
    assert_eq!(body["value"], r#"{"host":"db1","port":"5432"}"#);
}

#[tokio::test]
async fn default_secret_resolves_as_object() {
    let (status, body) = get(test_router(), "/api/v1/stores/Manager2/secret/object").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"], "svc");
    assert_eq!(body["password"], "p1");
}

#[tokio::test]
async fn keyed_value_extracts_a_single_field() {
    let (status, body) = get(test_router(), "/api/v1/stores/Manager1/secret/keys/host").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["key"], "host");
    assert_eq!(body["value"], "db1");
}

#[tokio::test]
async fn missing_key_is_a_404() {
    let (status, body) = get(test_router(), "/api/v1/stores/Manager1/secret/keys/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert!(body["message"].as_str().unwrap().contains("'missing'"));
}

#[tokio::test]
async fn named_secret_resolves_by_identifier() {
    let (status, body) =
        get(test_router(), "/api/v1/stores/Manager1/secrets/app%2Fapi-key").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["secretId"], "app/api-key");
    assert_eq!(body["value"], "plain-token");
}

#[tokio::test]
async fn unknown_store_is_a_404() {
    let (status, body) = get(test_router(), "/api/v1/stores/Manager9/secret").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn missing_default_secret_is_a_404() {
    // Manager3 is registered but its default secret does not exist.
    let (status, body) = get(test_router(), "/api/v1/stores/Manager3/secret").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("empty/default"));
}

#[tokio::test]
async fn config_value_resolves_merged_key() {
    let (status, body) = get(test_router(), "/api/v1/config/Say:MyName").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["key"], "Say:MyName");
    assert_eq!(body["value"], "Heisenberg");
}

#[tokio::test]
async fn unknown_config_key_is_a_404() {
    let (status, body) = get(test_router(), "/api/v1/config/Nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, body) = get(test_router(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/stores/{store}/secret"].is_object());
}
