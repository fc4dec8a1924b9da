//! Integration tests for registration and login.

mod helpers;

use http::StatusCode;

use helpers::{ADMIN_TOKEN, TestApp};

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app.register("gooduser1", "Passw0rd!").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!({"response": {"login": "gooduser1"}}));
    assert!(app.users.contains("gooduser1"));
}

#[tokio::test]
async fn test_register_duplicate() {
    let app = TestApp::new().await;
    assert_eq!(app.register("gooduser1", "Passw0rd!").await.status, StatusCode::OK);

    let response = app.register("gooduser1", "Passw0rd!").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], 400);
    assert_eq!(response.error_text(), "login already exists");
}

#[tokio::test]
async fn test_register_policy_violations() {
    let app = TestApp::new().await;

    let cases = [
        ("short", "Passw0rd!", "login must be at least 8 characters long"),
        ("bad_login1", "Passw0rd!", "login must contain only latin letters and digits"),
        ("gooduser1", "Pa0!", "password must be at least 8 characters long"),
        ("gooduser1", "passw0rd!", "password must contain at least one uppercase letter"),
        ("gooduser1", "PASSW0RD!", "password must contain at least one lowercase letter"),
        ("gooduser1", "Password!", "password must contain at least one digit"),
        ("gooduser1", "Passw0rdX", "password must contain at least one special character"),
    ];

    for (login, password, message) in cases {
        let response = app.register(login, password).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{login}/{password}");
        assert_eq!(response.error_text(), message);
    }

    assert!(!app.users.contains("gooduser1"));
}

#[tokio::test]
async fn test_register_admin_credential() {
    let app = TestApp::new().await;
    let body = serde_json::json!({"login": "gooduser1", "pswd": "Passw0rd!"});

    let response = app.post_json("/api/register", body.clone(), None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_text(), "No authorization header found");

    let response = app
        .post_json("/api/register", body.clone(), Some("not-the-admin-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_text(), "Invalid admin token");

    let req = http::Request::builder()
        .method("POST")
        .uri("/api/register")
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Token {ADMIN_TOKEN}"))
        .body(axum::body::Body::from(body.to_string()))
        .unwrap();
    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_text(), "Invalid authorization header format");

    assert!(!app.users.contains("gooduser1"));
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = TestApp::new().await;

    let response = app
        .post_raw("/api/register", "application/json", b"{not json".to_vec(), Some(ADMIN_TOKEN))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_text(), "invalid request body");

    let response = app
        .post_json(
            "/api/register",
            serde_json::json!({"login": "gooduser1", "pswd": "Passw0rd!", "role": "admin"}),
            Some(ADMIN_TOKEN),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_text(), "invalid request body");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.register("gooduser1", "Passw0rd!").await;

    let response = app
        .post_json(
            "/api/auth",
            serde_json::json!({"login": "gooduser1", "pswd": "Passw0rd!"}),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["response"]["token"].as_str().unwrap();
    // 32 random bytes, unpadded base64
    assert_eq!(token.len(), 43);
    assert!(!token.contains('='));
}

#[tokio::test]
async fn test_login_tokens_are_distinct() {
    let app = TestApp::new().await;
    let first = app.login_new_user("gooduser1", "Passw0rd!").await;

    let response = app
        .post_json(
            "/api/auth",
            serde_json::json!({"login": "gooduser1", "pswd": "Passw0rd!"}),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_ne!(response.body["response"]["token"].as_str().unwrap(), first);
}

#[tokio::test]
async fn test_login_failures_share_message() {
    let app = TestApp::new().await;
    app.register("gooduser1", "Passw0rd!").await;

    let wrong_password = app
        .post_json(
            "/api/auth",
            serde_json::json!({"login": "gooduser1", "pswd": "Wr0ngPass!"}),
            None,
        )
        .await;
    let unknown_user = app
        .post_json(
            "/api/auth",
            serde_json::json!({"login": "nobody123", "pswd": "Passw0rd!"}),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
    assert_eq!(wrong_password.error_text(), "invalid login or password");
}

#[tokio::test]
async fn test_login_oversized_body() {
    let app = TestApp::new().await;
    let padding = "x".repeat(2 * 1024 * 1024);

    let response = app
        .post_json(
            "/api/auth",
            serde_json::json!({"login": "gooduser1", "pswd": padding}),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_text(), "invalid request body");
}

#[tokio::test]
async fn test_login_token_store_unavailable() {
    let app = TestApp::with_token_store(
        helpers::test_config(""),
        std::sync::Arc::new(helpers::UnavailableTokenStore),
    )
    .await;
    app.register("gooduser1", "Passw0rd!").await;

    let response = app
        .post_json(
            "/api/auth",
            serde_json::json!({"login": "gooduser1", "pswd": "Passw0rd!"}),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        serde_json::json!({"error": {"code": 500, "text": "internal server error"}})
    );
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let req = http::Request::builder()
        .uri("/api/health")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["response"]["status"], "ok");
}
