use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use portal_auth::{AuthApi, AuthError, RegisterRequest, RegistrationReply};
use portal_kernel::http::{ApiClient, HttpError};
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn spawn_stub(router: Router) -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    ApiClient::builder().base_url(format!("http://{addr}")).build().expect("client")
}

fn request() -> RegisterRequest {
    RegisterRequest {
        username: "ana".to_owned(),
        email: "ana@example.com".to_owned(),
        password: "Secret#123".to_owned(),
        confirm_password: "Secret#123".to_owned(),
    }
}

#[tokio::test]
async fn register_posts_camel_case_body() -> Result<(), AuthError> {
    let router = Router::new().route(
        "/api/auth/register",
        post(|Json(body): Json<Value>| async move {
            let expected = json!({
                "username": "ana",
                "email": "ana@example.com",
                "password": "Secret#123",
                "confirmPassword": "Secret#123",
            });
            if body == expected {
                Json(json!({ "success": true, "user": { "id": 7 } }))
            } else {
                Json(json!({ "success": false, "message": [format!("unexpected body {body}")] }))
            }
        }),
    );
    let api = spawn_stub(router).await;

    assert_eq!(api.register(&request()).await?, RegistrationReply::Accepted);
    Ok(())
}

#[tokio::test]
async fn validation_failures_on_4xx_are_rejections() -> Result<(), AuthError> {
    let router = Router::new().route(
        "/api/auth/register",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": ["Username already taken"] })),
            )
        }),
    );
    let api = spawn_stub(router).await;

    assert_eq!(
        api.register(&request()).await?,
        RegistrationReply::Rejected(vec!["Username already taken".to_owned()])
    );
    Ok(())
}

#[tokio::test]
async fn failure_without_messages_breaks_the_contract() {
    let router = Router::new()
        .route("/api/auth/register", post(|| async { Json(json!({ "success": false })) }));
    let api = spawn_stub(router).await;

    let err = api.register(&request()).await.expect_err("no messages to show");
    assert!(matches!(err, AuthError::Protocol { .. }), "unexpected: {err}");
}

#[tokio::test]
async fn non_json_reply_is_a_transport_error() {
    let router = Router::new().route(
        "/api/auth/register",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let api = spawn_stub(router).await;

    let err = api.register(&request()).await.expect_err("plain text must not decode");
    assert!(
        matches!(err, AuthError::Transport { source: HttpError::Decode { .. }, .. }),
        "unexpected: {err}"
    );
    assert!(err.to_string().contains("Registration request failed"), "{err}");
}
