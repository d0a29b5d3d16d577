use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::role_assignment::domain::model::results::role_assignment_result::RoleAssignmentResult;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct RoleAssignmentResultResource {
    /// `false` when the role was set.
    pub error: bool,
    pub code: String,
    pub message: String,
}

impl From<RoleAssignmentResult> for RoleAssignmentResultResource {
    fn from(result: RoleAssignmentResult) -> Self {
        Self {
            error: result.error,
            code: result.code,
            message: result.message,
        }
    }
}

/// Callable envelope: the handler's return value travels under `result`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct SetUserRoleCallableResponseResource {
    pub result: RoleAssignmentResultResource,
}
