use claims_functions::{
    build_app,
    config::app_config::AppConfig,
    identity_platform::build_identity_platform_facade,
    shared::infrastructure::{logging::init_logger, shutdown::shutdown_signal},
};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logger("claims-functions");

    let config = AppConfig::from_env();

    let identity_platform_facade = build_identity_platform_facade(&config)
        .await
        .expect("failed to initialize identity platform client");

    let app = build_app(identity_platform_facade);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!("listening on http://localhost:{}", config.port);
    info!(
        "Swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("failed to start axum server");
}
