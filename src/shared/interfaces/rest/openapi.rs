use utoipa::OpenApi;

use crate::{
    role_assignment::interfaces::rest::resources::{
        role_assignment_result_resource::{
            RoleAssignmentResultResource, SetUserRoleCallableResponseResource,
        },
        set_user_role_request_resource::{
            SetUserRoleCallableRequestResource, SetUserRoleRequestResource,
        },
    },
    shared::interfaces::callable::callable_error_response_resource::{
        CallableErrorBodyResource, CallableErrorResponseResource,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::role_assignment::interfaces::rest::controllers::role_assignment_callable_controller::set_user_role,
        crate::hello_world::interfaces::rest::controllers::hello_world_rest_controller::hello_world
    ),
    components(
        schemas(
            SetUserRoleRequestResource,
            SetUserRoleCallableRequestResource,
            RoleAssignmentResultResource,
            SetUserRoleCallableResponseResource,
            CallableErrorResponseResource,
            CallableErrorBodyResource
        )
    ),
    tags(
        (name = "role-assignment", description = "Callable function assigning a role custom claim"),
        (name = "hello-world", description = "Greeting endpoint")
    )
)]
pub struct ApiDoc;
