use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct SetUserRoleRequestResource {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub uid: Option<String>,
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub role: Option<String>,
}

/// Callable envelope: the payload travels under `data`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SetUserRoleCallableRequestResource {
    pub data: SetUserRoleRequestResource,
}
