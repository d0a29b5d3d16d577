use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::{
    identity_platform::{
        domain::model::value_objects::custom_claims::CustomClaims,
        interfaces::acl::identity_platform_facade::IdentityPlatformFacade,
    },
    role_assignment::domain::{
        model::{
            commands::assign_role_to_user_command::AssignRoleToUserCommand,
            enums::role_assignment_domain_error::RoleAssignmentDomainError,
            results::role_assignment_result::RoleAssignmentResult,
        },
        services::role_assignment_command_service::RoleAssignmentCommandService,
    },
};

pub struct RoleAssignmentCommandServiceImpl {
    identity_platform_facade: Arc<dyn IdentityPlatformFacade>,
}

impl RoleAssignmentCommandServiceImpl {
    pub fn new(identity_platform_facade: Arc<dyn IdentityPlatformFacade>) -> Self {
        Self {
            identity_platform_facade,
        }
    }
}

#[async_trait]
impl RoleAssignmentCommandService for RoleAssignmentCommandServiceImpl {
    async fn handle_assign_role(
        &self,
        command: AssignRoleToUserCommand,
    ) -> Result<RoleAssignmentResult, RoleAssignmentDomainError> {
        let uid = command.user_id().value();
        let role = command.role_name().value();

        info!(uid, role, "Setting role: {role} for uid: {uid}");

        let claims = CustomClaims::with_role(role);
        if let Err(claims_error) = self
            .identity_platform_facade
            .set_custom_user_claims(uid, &claims)
            .await
        {
            error!(uid, role, error = %claims_error, "Error setting custom claim");
            return Err(RoleAssignmentDomainError::ClaimsWriteFailed(
                claims_error.to_string(),
            ));
        }

        info!(uid, role, "Role '{role}' set for user {uid}");

        Ok(RoleAssignmentResult::role_set(
            command.user_id(),
            command.role_name(),
        ))
    }
}
