use axum::Router;

pub mod interfaces;

pub fn build_hello_world_router() -> Router {
    interfaces::rest::controllers::hello_world_rest_controller::router()
}
