use std::sync::Arc;

use tracing::info;

use crate::{
    config::app_config::{AppConfig, EMULATOR_ACCESS_TOKEN},
    identity_platform::{
        application::acl::{
            metadata_server_access_token_provider_impl::MetadataServerAccessTokenProvider,
            rest_identity_platform_facade_impl::RestIdentityPlatformFacadeImpl,
            static_access_token_provider_impl::StaticAccessTokenProvider,
        },
        infrastructure::http::identity_platform_http_client::build_http_client,
        interfaces::acl::{
            access_token_provider::AccessTokenProvider, identity_platform_facade::IdentityPlatformFacade,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

/// Builds the identity platform client once at startup. Credentials come from
/// the Auth emulator, an explicit access token, or the metadata server, in
/// that order.
pub async fn build_identity_platform_facade(
    config: &AppConfig,
) -> Result<Arc<dyn IdentityPlatformFacade>, String> {
    let client = build_http_client(config.identity_platform_timeout()).map_err(|e| e.to_string())?;

    let metadata_provider =
        MetadataServerAccessTokenProvider::new(client.clone(), config.metadata_base_url());

    let project_id = match &config.project_id {
        Some(project_id) => project_id.clone(),
        None if config.uses_auth_emulator() => {
            return Err(
                "project id is not configured (set GCLOUD_PROJECT or GOOGLE_CLOUD_PROJECT)"
                    .to_string(),
            );
        }
        None => metadata_provider
            .fetch_project_id()
            .await
            .map_err(|e| e.to_string())?,
    };

    let access_token_provider: Arc<dyn AccessTokenProvider> = if config.uses_auth_emulator() {
        Arc::new(StaticAccessTokenProvider::new(EMULATOR_ACCESS_TOKEN))
    } else if let Some(token) = &config.identity_platform_access_token {
        Arc::new(StaticAccessTokenProvider::new(token.clone()))
    } else {
        Arc::new(metadata_provider)
    };

    let base_url = config.identity_platform_base_url();
    info!(
        project_id = %project_id,
        base_url = %base_url,
        emulator = config.uses_auth_emulator(),
        "identity platform client initialized"
    );

    Ok(Arc::new(RestIdentityPlatformFacadeImpl::new(
        client,
        base_url,
        project_id,
        access_token_provider,
    )))
}
