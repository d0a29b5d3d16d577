use std::sync::Arc;

use axum::{Json, Router, extract::State, extract::rejection::JsonRejection, routing::post};
use tracing::{instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::{
    role_assignment::{
        domain::{
            model::{
                commands::assign_role_to_user_command::AssignRoleToUserCommand,
                enums::role_assignment_domain_error::RoleAssignmentDomainError,
            },
            services::role_assignment_command_service::RoleAssignmentCommandService,
        },
        interfaces::rest::resources::{
            role_assignment_result_resource::SetUserRoleCallableResponseResource,
            set_user_role_request_resource::SetUserRoleCallableRequestResource,
        },
    },
    shared::interfaces::callable::{
        callable_error::{CallableError, CallableRejection},
        callable_error_response_resource::CallableErrorResponseResource,
    },
};

#[derive(Clone)]
pub struct RoleAssignmentCallableControllerState {
    pub command_service: Arc<dyn RoleAssignmentCommandService>,
}

pub fn router(state: RoleAssignmentCallableControllerState) -> Router {
    Router::new()
        .route("/setUserRole", post(set_user_role))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/setUserRole",
    tag = "role-assignment",
    request_body = SetUserRoleCallableRequestResource,
    responses(
        (status = 200, description = "Role set as a custom claim", body = SetUserRoleCallableResponseResource),
        (status = 400, description = "Missing uid or role", body = CallableErrorResponseResource),
        (status = 500, description = "Identity platform failure", body = CallableErrorResponseResource)
    )
)]
#[instrument(name = "setUserRole", skip_all, fields(invocation_id = %Uuid::now_v7()))]
pub async fn set_user_role(
    State(state): State<RoleAssignmentCallableControllerState>,
    payload: Result<Json<SetUserRoleCallableRequestResource>, JsonRejection>,
) -> Result<Json<SetUserRoleCallableResponseResource>, CallableRejection> {
    let Json(envelope) =
        payload.map_err(|rejection| CallableError::from(rejection).into_rejection())?;
    let request = envelope.data;

    if request.validate().is_err() {
        warn!(
            uid = ?request.uid,
            role = ?request.role,
            "missing either uid or role"
        );
        return Err(map_domain_error(RoleAssignmentDomainError::MissingUidOrRole));
    }

    let command = AssignRoleToUserCommand::new(
        request.uid.unwrap_or_default(),
        request.role.unwrap_or_default(),
    )
    .map_err(map_domain_error)?;

    let result = state
        .command_service
        .handle_assign_role(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(SetUserRoleCallableResponseResource {
        result: result.into(),
    }))
}

fn map_domain_error(error: RoleAssignmentDomainError) -> CallableRejection {
    let message = error.to_string();
    let callable_error = match error {
        RoleAssignmentDomainError::MissingUidOrRole => CallableError::invalid_argument(message),
        RoleAssignmentDomainError::ClaimsWriteFailed(_) => CallableError::internal(message),
    };

    callable_error.into_rejection()
}
