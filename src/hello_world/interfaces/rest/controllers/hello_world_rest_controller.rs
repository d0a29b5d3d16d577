use axum::{Router, routing::any};
use tracing::info;

pub const HELLO_WORLD_BODY: &str = "Hello from Firebase!";

pub fn router() -> Router {
    Router::new().route("/helloWorld", any(hello_world))
}

/// Answers every HTTP method; the document lists the two callers use.
#[utoipa::path(
    method(get, post),
    path = "/helloWorld",
    tag = "hello-world",
    responses(
        (status = 200, description = "Fixed greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn hello_world() -> &'static str {
    info!(structured_data = true, "Hello logs!");
    HELLO_WORLD_BODY
}
