//! Integration tests for the startup configuration merge.

use std::collections::BTreeMap;
use std::sync::Arc;

use keybridge::secrets::{
    ConfigMergeProvider, InMemorySecretStore, KeyRewrite, NameFilter, SecretStore, SecretsError,
};

fn provider(store: InMemorySecretStore, filter: NameFilter, rewrite: KeyRewrite) -> ConfigMergeProvider {
    let store: Arc<dyn SecretStore> = Arc::new(store);
    ConfigMergeProvider::new(store, filter, rewrite)
}

#[tokio::test]
async fn prefix_filter_selects_only_matching_secrets() {
    let store = InMemorySecretStore::new("Api-Settings")
        .with_text("Api-Settings", r#"{"Endpoint":"https://api.example.com"}"#)
        .with_text("Internal-Settings", r#"{"Endpoint":"https://internal.example.com"}"#);

    let merged = provider(store, NameFilter::Prefix("Api-".to_string()), KeyRewrite::new())
        .load()
        .await
        .unwrap();

    assert_eq!(merged.len(), 1);
    assert_eq!(merged["Endpoint"], "https://api.example.com");
}

#[tokio::test]
async fn rewrite_maps_nested_paths_to_config_keys() {
    let store = InMemorySecretStore::new("Foo-Settings").with_text(
        "Foo-Settings",
        r#"{"A__B":"nested","ConnectionString__MySQLDBCloud":"Server=db;Uid=app"}"#,
    );

    let merged = provider(
        store,
        NameFilter::All,
        KeyRewrite::new().with_strip_prefix("Foo-"),
    )
    .load()
    .await
    .unwrap();

    assert_eq!(merged["A:B"], "nested");
    assert_eq!(merged["ConnectionString:MySQLDBCloud"], "Server=db;Uid=app");
}

#[tokio::test]
async fn nested_objects_flatten_with_hierarchy_separator() {
    let store = InMemorySecretStore::new("App-Settings").with_text(
        "App-Settings",
        r#"{"Database":{"Host":"db1","Port":5432},"FeatureFlag":true,"Legacy":null}"#,
    );

    let merged = provider(store, NameFilter::All, KeyRewrite::new()).load().await.unwrap();

    assert_eq!(merged["Database:Host"], "db1");
    assert_eq!(merged["Database:Port"], "5432");
    assert_eq!(merged["FeatureFlag"], "true");
    // A remote null still produces a key so it can override a local value.
    assert_eq!(merged["Legacy"], "");
}

#[tokio::test]
async fn load_is_deterministic_across_runs() {
    let build = || {
        InMemorySecretStore::new("App-A")
            .with_text("App-A", r#"{"Shared":"from-a","OnlyA":"a"}"#)
            .with_text("App-B", r#"{"Shared":"from-b","OnlyB":"b"}"#)
    };

    let first = provider(build(), NameFilter::All, KeyRewrite::new()).load().await.unwrap();
    let second = provider(build(), NameFilter::All, KeyRewrite::new()).load().await.unwrap();

    assert_eq!(first, second);
    // Secrets merge in lexicographic name order, so App-B wins the collision.
    assert_eq!(first["Shared"], "from-b");
    assert_eq!(first["OnlyA"], "a");
    assert_eq!(first["OnlyB"], "b");
}

#[tokio::test]
async fn malformed_secret_aborts_the_whole_load() {
    let store = InMemorySecretStore::new("App-A")
        .with_text("App-A", r#"{"Good":"value"}"#)
        .with_text("App-B", "this is not json");

    let mut target = BTreeMap::from([("Existing".to_string(), "kept".to_string())]);
    let err = provider(store, NameFilter::All, KeyRewrite::new())
        .merge_into(&mut target)
        .await
        .unwrap_err();

    assert!(matches!(err, SecretsError::NotJson { .. }));
    // Nothing was applied, not even fields from the well-formed secret.
    assert_eq!(target.len(), 1);
    assert_eq!(target["Existing"], "kept");
}

#[tokio::test]
async fn scalar_top_level_secret_is_rejected() {
    let store = InMemorySecretStore::new("App-A").with_text("App-A", r#""just a string""#);
    let err = provider(store, NameFilter::All, KeyRewrite::new()).load().await.unwrap_err();
    assert!(matches!(err, SecretsError::NotJson { .. }));
}

#[tokio::test]
async fn remote_values_override_local_entries() {
    let store = InMemorySecretStore::new("App-Settings")
        .with_text("App-Settings", r#"{"Say__MyName":"Heisenberg"}"#);

    let mut target = BTreeMap::from([
        ("Say:MyName".to_string(), "local".to_string()),
        ("Other".to_string(), "untouched".to_string()),
    ]);
    provider(store, NameFilter::All, KeyRewrite::new())
        .merge_into(&mut target)
        .await
        .unwrap();

    assert_eq!(target["Say:MyName"], "Heisenberg");
    assert_eq!(target["Other"], "untouched");
}
