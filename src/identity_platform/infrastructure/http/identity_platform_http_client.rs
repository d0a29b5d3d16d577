use std::time::Duration;

use reqwest::Client;

use crate::identity_platform::interfaces::acl::identity_platform_facade::IdentityPlatformError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for the Identity Toolkit and metadata server calls.
pub fn build_http_client(timeout: Duration) -> Result<Client, IdentityPlatformError> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| {
            IdentityPlatformError::Unavailable(format!("Failed to build HTTP client: {e}"))
        })
}
