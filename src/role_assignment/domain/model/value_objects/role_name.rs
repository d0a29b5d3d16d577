use crate::role_assignment::domain::model::enums::role_assignment_domain_error::RoleAssignmentDomainError;

/// Application-defined role label. Any non-empty string is accepted.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RoleName(String);

impl RoleName {
    pub fn new(value: String) -> Result<Self, RoleAssignmentDomainError> {
        if value.is_empty() {
            return Err(RoleAssignmentDomainError::MissingUidOrRole);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
