use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::identity_platform::interfaces::acl::{
    access_token_provider::AccessTokenProvider, identity_platform_facade::IdentityPlatformError,
};

const METADATA_FLAVOR_HEADER: &str = "Metadata-Flavor";
const METADATA_FLAVOR: &str = "Google";
const TOKEN_PATH: &str = "/computeMetadata/v1/instance/service-accounts/default/token";
const PROJECT_ID_PATH: &str = "/computeMetadata/v1/project/project-id";
const DEFAULT_REFRESH_MARGIN: Duration = Duration::from_secs(300);

#[derive(Deserialize)]
struct MetadataTokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Clone)]
struct CachedAccessToken {
    token: String,
    refresh_at: Instant,
}

/// Application default credentials of the runtime's service account, read
/// from the compute metadata server.
pub struct MetadataServerAccessTokenProvider {
    client: Client,
    base_url: String,
    refresh_margin: Duration,
    cache: RwLock<Option<CachedAccessToken>>,
}

impl MetadataServerAccessTokenProvider {
    pub fn new(client: Client, base_url: String) -> Self {
        Self::new_with_refresh_margin(client, base_url, DEFAULT_REFRESH_MARGIN)
    }

    pub fn new_with_refresh_margin(
        client: Client,
        base_url: String,
        refresh_margin: Duration,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            refresh_margin,
            cache: RwLock::new(None),
        }
    }

    /// Project the runtime belongs to.
    pub async fn fetch_project_id(&self) -> Result<String, IdentityPlatformError> {
        let response = self
            .client
            .get(format!("{}{PROJECT_ID_PATH}", self.base_url))
            .header(METADATA_FLAVOR_HEADER, METADATA_FLAVOR)
            .send()
            .await
            .map_err(|e| {
                IdentityPlatformError::Credential(format!(
                    "Failed to determine project id from metadata server: {e}"
                ))
            })?;

        if !response.status().is_success() {
            return Err(IdentityPlatformError::Credential(format!(
                "Failed to determine project id from metadata server: HTTP {}",
                response.status()
            )));
        }

        let project_id = response
            .text()
            .await
            .map_err(|e| IdentityPlatformError::Credential(e.to_string()))?;

        let project_id = project_id.trim();
        if project_id.is_empty() {
            return Err(IdentityPlatformError::Credential(
                "metadata server returned an empty project id".to_string(),
            ));
        }
        Ok(project_id.to_string())
    }

    async fn get_cached(&self) -> Option<String> {
        let guard = self.cache.read().await;
        guard.as_ref().and_then(|entry| {
            if entry.refresh_at > Instant::now() {
                Some(entry.token.clone())
            } else {
                None
            }
        })
    }

    async fn fetch_token(&self) -> Result<MetadataTokenResponse, IdentityPlatformError> {
        let response = self
            .client
            .get(format!("{}{TOKEN_PATH}", self.base_url))
            .header(METADATA_FLAVOR_HEADER, METADATA_FLAVOR)
            .send()
            .await
            .map_err(|e| {
                IdentityPlatformError::Credential(format!(
                    "Failed to fetch a valid access token from the metadata server: {e}"
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityPlatformError::Credential(format!(
                "Failed to fetch a valid access token from the metadata server: HTTP {status} {body}"
            )));
        }

        response.json::<MetadataTokenResponse>().await.map_err(|e| {
            IdentityPlatformError::Credential(format!(
                "Unexpected access token response from the metadata server: {e}"
            ))
        })
    }
}

#[async_trait]
impl AccessTokenProvider for MetadataServerAccessTokenProvider {
    #[instrument(skip(self))]
    async fn access_token(&self) -> Result<String, IdentityPlatformError> {
        if let Some(token) = self.get_cached().await {
            return Ok(token);
        }

        let mut guard = self.cache.write().await;
        // Another task may have refreshed while we waited for the write lock.
        if let Some(entry) = guard.as_ref().filter(|entry| entry.refresh_at > Instant::now()) {
            return Ok(entry.token.clone());
        }

        let fetched = self.fetch_token().await?;
        let lifetime = Duration::from_secs(fetched.expires_in);
        debug!(expires_in = fetched.expires_in, "fetched access token");

        *guard = Some(CachedAccessToken {
            token: fetched.access_token.clone(),
            refresh_at: Instant::now() + lifetime.saturating_sub(self.refresh_margin),
        });

        Ok(fetched.access_token)
    }
}
