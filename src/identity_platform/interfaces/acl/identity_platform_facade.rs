use async_trait::async_trait;

use crate::identity_platform::domain::model::value_objects::custom_claims::CustomClaims;

/// Failures of the identity platform. `Display` yields only the message text,
/// which callers embed verbatim into their own error messages.
#[derive(Clone, Debug, thiserror::Error)]
pub enum IdentityPlatformError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Credential(String),
}

#[async_trait]
pub trait IdentityPlatformFacade: Send + Sync {
    /// Replaces the custom claims of the user identified by `uid`.
    async fn set_custom_user_claims(
        &self,
        uid: &str,
        claims: &CustomClaims,
    ) -> Result<(), IdentityPlatformError>;
}
