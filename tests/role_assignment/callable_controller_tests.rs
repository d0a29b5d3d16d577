use axum::{Json, extract::State, http::StatusCode};
use claims_functions::{
    identity_platform::interfaces::acl::identity_platform_facade::IdentityPlatformError,
    role_assignment::interfaces::rest::{
        controllers::role_assignment_callable_controller::set_user_role,
        resources::role_assignment_result_resource::RoleAssignmentResultResource,
    },
};

use crate::support::{callable_request, create_controller_harness};

#[tokio::test]
async fn set_user_role_returns_success_result() {
    let harness = create_controller_harness();

    let Json(response) = set_user_role(
        State(harness.state),
        Ok(Json(callable_request(Some("u1"), Some("admin")))),
    )
    .await
    .expect("role should be set");

    assert_eq!(
        response.result,
        RoleAssignmentResultResource {
            error: false,
            code: "ROLE_SET_SUCCESS".to_string(),
            message: "Role 'admin' set for user u1".to_string(),
        }
    );
    assert_eq!(harness.identity_platform.call_count(), 1);
}

#[tokio::test]
async fn set_user_role_rejects_missing_fields_without_calling_platform() {
    let cases = [
        (Some(""), Some("admin")),
        (Some("u1"), Some("")),
        (None, Some("admin")),
        (Some("u1"), None),
        (None, None),
    ];

    for (uid, role) in cases {
        let harness = create_controller_harness();

        let result =
            set_user_role(State(harness.state), Ok(Json(callable_request(uid, role)))).await;

        let (status, Json(body)) = result.expect_err("missing field must be rejected");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.status, "INVALID_ARGUMENT");
        assert_eq!(body.error.message, "Missing uid or role. Operation failed.");
        assert_eq!(harness.identity_platform.call_count(), 0);
    }
}

#[tokio::test]
async fn set_user_role_reports_platform_failure_as_internal() {
    let harness = create_controller_harness();
    harness
        .identity_platform
        .fail_with(IdentityPlatformError::Unavailable("quota exceeded".to_string()));

    let result = set_user_role(
        State(harness.state),
        Ok(Json(callable_request(Some("u1"), Some("admin")))),
    )
    .await;

    let (status, Json(body)) = result.expect_err("platform failure must surface");
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error.status, "INTERNAL");
    assert_eq!(
        body.error.message,
        "Internal Server Error. Error message: quota exceeded"
    );
}

#[tokio::test]
async fn set_user_role_passes_whitespace_values_through() {
    let harness = create_controller_harness();

    let Json(response) = set_user_role(
        State(harness.state),
        Ok(Json(callable_request(Some(" "), Some("admin")))),
    )
    .await
    .expect("whitespace is not empty");

    assert_eq!(response.result.message, "Role 'admin' set for user  ");
    assert_eq!(harness.identity_platform.calls()[0].0, " ");
}
