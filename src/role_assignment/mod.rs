use std::sync::Arc;

use axum::Router;

use crate::{
    identity_platform::interfaces::acl::identity_platform_facade::IdentityPlatformFacade,
    role_assignment::{
        application::command_services::role_assignment_command_service_impl::RoleAssignmentCommandServiceImpl,
        interfaces::rest::controllers::role_assignment_callable_controller::{
            RoleAssignmentCallableControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_role_assignment_router(
    identity_platform_facade: Arc<dyn IdentityPlatformFacade>,
) -> Router {
    let command_service = Arc::new(RoleAssignmentCommandServiceImpl::new(
        identity_platform_facade,
    ));

    router(RoleAssignmentCallableControllerState { command_service })
}
