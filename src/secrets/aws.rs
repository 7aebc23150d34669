//! AWS Secrets Manager store client.
//!
//! One client per configured store identity, bound to that identity's static
//! credential pair and region. Supports an endpoint override for
//! Secrets-Manager-compatible local stores.

use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::config::{Credentials, Region};
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::Client;
use async_trait::async_trait;
use tracing::debug;

use crate::config::StoreIdentitySettings;

use super::error::{Result, SecretsError};
use super::payload::RawSecretPayload;
use super::store::SecretStore;

/// Secret store client backed by AWS Secrets Manager.
pub struct AwsSecretsManagerStore {
    client: Client,
    region: String,
    default_secret: String,
}

impl std::fmt::Debug for AwsSecretsManagerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsManagerStore")
            .field("region", &self.region)
            .field("default_secret", &self.default_secret)
            .field("client", &"[SecretsManagerClient]")
            .finish()
    }
}

impl AwsSecretsManagerStore {
    /// Create a client for the identity registered under `name`.
    ///
    /// Fails with `InvalidSettings` when the entry is malformed; the registry
    /// turns that into a whole-build failure.
    pub fn new(name: &str, settings: &StoreIdentitySettings) -> Result<Self> {
        settings
            .check()
            .map_err(|reason| SecretsError::invalid_settings(name, reason))?;

        let credentials = Credentials::new(
            settings.access_key.expose_secret(),
            settings.secret_key.expose_secret(),
            None,
            None,
            "keybridge-store-settings",
        );

        let mut builder = aws_sdk_secretsmanager::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(credentials);
        if let Some(endpoint) = &settings.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            region: settings.region.clone(),
            default_secret: settings.secret_manager_name.clone(),
        })
    }

    /// The region this client is bound to.
    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl SecretStore for AwsSecretsManagerStore {
    async fn get_secret_value(&self, secret_id: &str) -> Result<RawSecretPayload> {
        debug!(secret_id, region = %self.region, "Fetching secret value");

        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|err| map_sdk_error(secret_id, err))?;

        let text = output.secret_string().map(str::to_string);
        let binary = output.secret_binary().map(|blob| blob.as_ref().to_vec());
        RawSecretPayload::from_parts(secret_id, text, binary)
    }

    async fn list_secret_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut pages = self.client.list_secrets().into_paginator().send();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|err| map_sdk_error("<list>", err))?;
            for entry in page.secret_list() {
                if let Some(name) = entry.name() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        debug!(count = names.len(), region = %self.region, "Enumerated secret names");
        Ok(names)
    }

    fn default_secret(&self) -> &str {
        &self.default_secret
    }
}

/// Map an SDK error onto the resolution taxonomy.
///
/// Service rejections are classified by their structured error code, never by
/// message text. Anything unclassified, including connect/timeout failures,
/// is a `StoreUnavailable`.
fn map_sdk_error<E>(secret_id: &str, err: SdkError<E>) -> SecretsError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match &err {
        SdkError::ServiceError(context) => {
            let meta = context.err().meta();
            match meta.code() {
                Some("ResourceNotFoundException") => SecretsError::not_found(secret_id),
                Some(
                    "AccessDeniedException"
                    | "UnrecognizedClientException"
                    | "InvalidSignatureException"
                    | "UnauthorizedAccess",
                ) => SecretsError::unauthorized(format!("{}", DisplayErrorContext(&err))),
                _ => SecretsError::store_unavailable(format!("{}", DisplayErrorContext(&err))),
            }
        }
        _ => SecretsError::store_unavailable(format!("{}", DisplayErrorContext(&err))),
    }
}
