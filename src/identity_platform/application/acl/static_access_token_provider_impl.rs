use async_trait::async_trait;

use crate::identity_platform::interfaces::acl::{
    access_token_provider::AccessTokenProvider, identity_platform_facade::IdentityPlatformError,
};

/// Hands out one fixed token: `owner` for the Auth emulator, or an
/// operator-supplied token.
pub struct StaticAccessTokenProvider {
    token: String,
}

impl StaticAccessTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticAccessTokenProvider {
    async fn access_token(&self) -> Result<String, IdentityPlatformError> {
        if self.token.trim().is_empty() {
            return Err(IdentityPlatformError::Credential(
                "access token is empty".to_string(),
            ));
        }
        Ok(self.token.clone())
    }
}
