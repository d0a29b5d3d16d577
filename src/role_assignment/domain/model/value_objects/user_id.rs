use crate::role_assignment::domain::model::enums::role_assignment_domain_error::RoleAssignmentDomainError;

/// Subject identifier issued by the identity platform. Kept verbatim.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UserId(String);

impl UserId {
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
