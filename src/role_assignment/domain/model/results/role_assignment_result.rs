use crate::role_assignment::domain::model::value_objects::{role_name::RoleName, user_id::UserId};

pub const ROLE_SET_SUCCESS: &str = "ROLE_SET_SUCCESS";

/// Outcome returned to the caller. `error` is `false` on success; the field
/// name is kept as-is because existing clients read it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleAssignmentResult {
    pub error: bool,
    pub code: String,
    pub message: String,
}

impl RoleAssignmentResult {
    pub fn role_set(user_id: &UserId, role_name: &RoleName) -> Self {
        Self {
            error: false,
            code: ROLE_SET_SUCCESS.to_string(),
            message: format!(
                "Role '{}' set for user {}",
                role_name.value(),
                user_id.value()
            ),
        }
    }
}
