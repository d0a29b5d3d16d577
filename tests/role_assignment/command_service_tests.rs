use claims_functions::{
    identity_platform::interfaces::acl::identity_platform_facade::IdentityPlatformError,
    role_assignment::domain::{
        model::{
            enums::role_assignment_domain_error::RoleAssignmentDomainError,
            results::role_assignment_result::RoleAssignmentResult,
        },
        services::role_assignment_command_service::RoleAssignmentCommandService,
    },
};
use serde_json::json;

use crate::support::{ROLE, USER_ID, assign_role_command, create_command_harness};

#[tokio::test]
async fn handle_assign_role_writes_role_claim_and_reports_success() {
    let harness = create_command_harness();

    let result = harness
        .service
        .handle_assign_role(assign_role_command())
        .await
        .expect("role should be set");

    assert_eq!(
        result,
        RoleAssignmentResult {
            error: false,
            code: "ROLE_SET_SUCCESS".to_string(),
            message: "Role 'admin' set for user u1".to_string(),
        }
    );

    let calls = harness.identity_platform.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, USER_ID);
    assert_eq!(calls[0].1.get("role"), Some(&json!(ROLE)));
}

#[tokio::test]
async fn handle_assign_role_wraps_dependency_error_message() {
    let harness = create_command_harness();
    harness
        .identity_platform
        .fail_with(IdentityPlatformError::Unavailable("quota exceeded".to_string()));

    let error = harness
        .service
        .handle_assign_role(assign_role_command())
        .await
        .expect_err("dependency failure must surface");

    assert_eq!(
        error,
        RoleAssignmentDomainError::ClaimsWriteFailed("quota exceeded".to_string())
    );
    assert_eq!(
        error.to_string(),
        "Internal Server Error. Error message: quota exceeded"
    );
    assert_eq!(harness.identity_platform.call_count(), 1);
}

#[tokio::test]
async fn handle_assign_role_uses_rejection_message_from_platform() {
    let harness = create_command_harness();
    harness
        .identity_platform
        .fail_with(IdentityPlatformError::Rejected(
            "There is no user record corresponding to the provided identifier.".to_string(),
        ));

    let error = harness
        .service
        .handle_assign_role(assign_role_command())
        .await
        .expect_err("rejection must surface");

    assert_eq!(
        error.to_string(),
        "Internal Server Error. Error message: There is no user record corresponding to the provided identifier."
    );
}

#[tokio::test]
async fn handle_assign_role_twice_reissues_identical_claims() {
    let harness = create_command_harness();

    let first = harness
        .service
        .handle_assign_role(assign_role_command())
        .await
        .expect("first call succeeds");
    let second = harness
        .service
        .handle_assign_role(assign_role_command())
        .await
        .expect("second call succeeds");

    assert_eq!(first, second);

    let calls = harness.identity_platform.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}
