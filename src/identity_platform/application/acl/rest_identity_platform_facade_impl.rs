use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, header};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::identity_platform::{
    domain::model::value_objects::{custom_claims::CustomClaims, user_uid::UserUid},
    interfaces::acl::{
        access_token_provider::AccessTokenProvider,
        identity_platform_facade::{IdentityPlatformError, IdentityPlatformFacade},
    },
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetAccountInfoRequest<'a> {
    local_id: &'a str,
    custom_attributes: String,
}

/// Identity Toolkit (`accounts:update`) client.
pub struct RestIdentityPlatformFacadeImpl {
    client: Client,
    base_url: String,
    project_id: String,
    access_token_provider: Arc<dyn AccessTokenProvider>,
}

impl RestIdentityPlatformFacadeImpl {
    pub fn new(
        client: Client,
        base_url: String,
        project_id: String,
        access_token_provider: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id,
            access_token_provider,
        }
    }

    fn update_account_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/accounts:update",
            self.base_url, self.project_id
        )
    }
}

#[async_trait]
impl IdentityPlatformFacade for RestIdentityPlatformFacadeImpl {
    #[instrument(skip(self, claims))]
    async fn set_custom_user_claims(
        &self,
        uid: &str,
        claims: &CustomClaims,
    ) -> Result<(), IdentityPlatformError> {
        let uid = UserUid::new(uid).map_err(IdentityPlatformError::InvalidArgument)?;
        let custom_attributes = claims
            .to_payload()
            .map_err(IdentityPlatformError::InvalidArgument)?;

        let access_token = self.access_token_provider.access_token().await?;

        let response = self
            .client
            .post(self.update_account_url())
            .header(header::AUTHORIZATION, format!("Bearer {access_token}"))
            .json(&SetAccountInfoRequest {
                local_id: uid.value(),
                custom_attributes,
            })
            .send()
            .await
            .map_err(|e| IdentityPlatformError::Unavailable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "custom claims written");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%status, body = %body, "identity platform rejected custom claims update");
        Err(map_server_error(&body))
    }
}

/// Turns an Identity Toolkit error body into a typed error, with the message
/// text the platform's admin SDK produces. The server message has the form
/// `CODE` or `CODE : detail`; a detail takes precedence over the readable text
/// of a known code, and unknown codes report the raw response.
pub fn map_server_error(body: &str) -> IdentityPlatformError {
    let response = serde_json::from_str::<Value>(body).unwrap_or_else(|_| Value::from(body));

    let Some(server_message) = response
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
    else {
        return IdentityPlatformError::Rejected(format!(
            "Error returned from server: {response}. Additionally, an internal error occurred while attempting to extract the errorcode from the error."
        ));
    };

    let (code, detail) = match server_message.split_once(':') {
        Some((code, detail)) => (code.trim(), Some(detail.trim())),
        None => (server_message.trim(), None),
    };
    let detail = detail.filter(|value| !value.is_empty());

    let message = match readable_message(code) {
        Some(readable) => detail.unwrap_or(readable).to_string(),
        None => format!(
            "{} Raw server response: \"{response}\"",
            detail.unwrap_or(INTERNAL_ERROR_MESSAGE)
        ),
    };

    IdentityPlatformError::Rejected(message)
}

const INTERNAL_ERROR_MESSAGE: &str = "An internal error has occurred.";

fn readable_message(code: &str) -> Option<&'static str> {
    match code {
        "USER_NOT_FOUND" => {
            Some("There is no user record corresponding to the provided identifier.")
        }
        "INVALID_CLAIMS" => Some("The provided custom claim attributes are invalid."),
        "CLAIMS_TOO_LARGE" => Some("Developer claims maximum payload size exceeded."),
        "FORBIDDEN_CLAIM" => {
            Some("The specified developer claim is reserved and cannot be specified.")
        }
        "INSUFFICIENT_PERMISSION" => Some(
            "Credential implementation provided to initializeApp() via the \"credential\" property has insufficient permission to access the requested resource. See https://firebase.google.com/docs/admin/setup for details on how to authenticate this SDK with appropriate permissions.",
        ),
        "PROJECT_NOT_FOUND" => Some("No Firebase project was found for the provided credential."),
        _ => None,
    }
}
