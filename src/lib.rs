use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    hello_world::build_hello_world_router,
    identity_platform::interfaces::acl::identity_platform_facade::IdentityPlatformFacade,
    role_assignment::build_role_assignment_router,
    shared::interfaces::rest::openapi::ApiDoc,
};

pub mod config;
pub mod hello_world;
pub mod identity_platform;
pub mod role_assignment;
pub mod shared;

/// Assembles every endpoint around an already-initialized identity platform
/// client.
pub fn build_app(identity_platform_facade: Arc<dyn IdentityPlatformFacade>) -> Router {
    Router::new()
        .merge(build_role_assignment_router(identity_platform_facade))
        .merge(build_hello_world_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
