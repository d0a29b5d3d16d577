use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RoleAssignmentDomainError {
    #[error("Missing uid or role. Operation failed.")]
    MissingUidOrRole,

    #[error("Internal Server Error. Error message: {0}")]
    ClaimsWriteFailed(String),
}
