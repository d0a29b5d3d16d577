use crate::role_assignment::domain::model::{
    enums::role_assignment_domain_error::RoleAssignmentDomainError,
    value_objects::{role_name::RoleName, user_id::UserId},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssignRoleToUserCommand {
    user_id: UserId,
    role_name: RoleName,
}

impl AssignRoleToUserCommand {
    pub fn new(user_id: String, role_name: String) -> Result<Self, RoleAssignmentDomainError> {
        Ok(Self {
            user_id: UserId::new(user_id)?,
            role_name: RoleName::new(role_name)?,
        })
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
    pub fn role_name(&self) -> &RoleName {
        &self.role_name
    }
}
