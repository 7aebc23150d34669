//! Secret store trait.
//!
//! Defines the interface every backing store client implements. A store client
//! is a live handle bound to one store identity: created once at startup,
//! never mutated afterwards, and safe to share across request tasks.

use async_trait::async_trait;

use super::error::Result;
use super::payload::RawSecretPayload;

/// A client for one external secret store.
///
/// Implementations must be Send + Sync for use in async contexts.
#[async_trait]
pub trait SecretStore: Send + Sync + std::fmt::Debug {
    /// Fetch the raw payload for `secret_id` with a single request.
    ///
    /// No retries happen at this layer; retry or backoff policy belongs to the
    /// caller. Failure mapping:
    /// - the store reports the identifier does not exist → `NotFound`
    /// - credentials lack access → `Unauthorized`
    /// - transport/service errors (including timeouts) → `StoreUnavailable`
    /// - a success response with neither string nor binary → `EmptyPayload`
    async fn get_secret_value(&self, secret_id: &str) -> Result<RawSecretPayload>;

    /// Enumerate the secret names visible to this client, sorted
    /// lexicographically.
    ///
    /// Used by the configuration merge to discover candidates. Stores without
    /// an enumeration API fail with `StoreUnavailable`.
    async fn list_secret_names(&self) -> Result<Vec<String>>;

    /// The store-side secret name this identity was configured with.
    ///
    /// Per-store API endpoints that take no explicit identifier resolve
    /// against this name.
    fn default_secret(&self) -> &str;
}
