use async_trait::async_trait;

use super::identity_platform_facade::IdentityPlatformError;

#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// OAuth2 bearer token for calls to the identity platform.
    async fn access_token(&self) -> Result<String, IdentityPlatformError>;
}
