use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use claims_functions::{
    build_app, config::app_config::AppConfig, identity_platform::build_identity_platform_facade,
};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header as header_matcher, method, path},
};

fn emulator_config(server: &MockServer) -> AppConfig {
    AppConfig {
        port: 0,
        project_id: Some("demo-project".to_string()),
        auth_emulator_host: Some(server.address().to_string()),
        identity_platform_base_url: None,
        identity_platform_access_token: None,
        metadata_host: "127.0.0.1:1".to_string(),
        identity_platform_timeout_secs: 5,
    }
}

fn callable(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/setUserRole")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn set_user_role_writes_claim_through_emulator() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/identitytoolkit.googleapis.com/v1/projects/demo-project/accounts:update",
        ))
        .and(header_matcher("authorization", "Bearer owner"))
        .and(body_json(json!({
            "localId": "u1",
            "customAttributes": "{\"role\":\"admin\"}"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "localId": "u1" })))
        .expect(1)
        .mount(&server)
        .await;

    let facade = build_identity_platform_facade(&emulator_config(&server))
        .await
        .expect("facade");
    let response = build_app(facade)
        .oneshot(callable(json!({ "data": { "uid": "u1", "role": "admin" } })))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({
            "result": {
                "error": false,
                "code": "ROLE_SET_SUCCESS",
                "message": "Role 'admin' set for user u1"
            }
        })
    );
}

#[tokio::test]
async fn set_user_role_reports_unknown_user_as_internal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "USER_NOT_FOUND" }
        })))
        .mount(&server)
        .await;

    let facade = build_identity_platform_facade(&emulator_config(&server))
        .await
        .expect("facade");
    let response = build_app(facade)
        .oneshot(callable(json!({ "data": { "uid": "ghost", "role": "admin" } })))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({
            "error": {
                "status": "INTERNAL",
                "message": "Internal Server Error. Error message: There is no user record corresponding to the provided identifier."
            }
        })
    );
}

#[tokio::test]
async fn emulator_without_project_id_fails_at_startup() {
    let server = MockServer::start().await;
    let mut config = emulator_config(&server);
    config.project_id = None;

    let result = build_identity_platform_facade(&config).await;

    assert!(result.is_err());
}
