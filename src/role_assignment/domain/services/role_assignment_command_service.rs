use async_trait::async_trait;

use crate::role_assignment::domain::model::{
    commands::assign_role_to_user_command::AssignRoleToUserCommand,
    enums::role_assignment_domain_error::RoleAssignmentDomainError,
    results::role_assignment_result::RoleAssignmentResult,
};

#[async_trait]
pub trait RoleAssignmentCommandService: Send + Sync {
    async fn handle_assign_role(
        &self,
        command: AssignRoleToUserCommand,
    ) -> Result<RoleAssignmentResult, RoleAssignmentDomainError>;
}
