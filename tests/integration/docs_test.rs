//! Integration tests for document upload.

mod helpers;

use http::StatusCode;
use serde_json::json;

use docvault_core::types::DocumentId;
use helpers::{FormPart, TestApp, UnavailableTokenStore, test_config};

fn meta(value: serde_json::Value) -> FormPart {
    FormPart::text("meta", value.to_string())
}

async fn app_with_user() -> (TestApp, String) {
    let app = TestApp::new().await;
    let token = app.login_new_user("gooduser1", "Passw0rd!").await;
    (app, token)
}

fn stored_id(app: &TestApp) -> DocumentId {
    let owned = app.documents.owned_by("gooduser1");
    assert_eq!(owned.len(), 1);
    owned[0].id
}

#[tokio::test]
async fn test_upload_public_json_document() {
    let (app, token) = app_with_user().await;

    let response = app
        .post_form(
            "/api/docs",
            &[
                meta(json!({"name": "a.txt", "file": false, "public": true, "token": token})),
                FormPart::text("json", r#"{"k":1}"#),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body, json!({"response": {"json": {"k": 1}, "file": "a.txt"}}));

    let stored = app.documents.get(&stored_id(&app)).unwrap();
    assert!(stored.is_public);
    assert!(stored.grant.is_empty());
    assert_eq!(stored.json.as_deref(), Some(&br#"{"k":1}"#[..]));
}

#[tokio::test]
async fn test_upload_private_document_granted_to_owner() {
    let (app, token) = app_with_user().await;

    let response = app
        .post_form(
            "/api/docs",
            &[meta(json!({"name": "a.txt", "file": false, "public": false, "token": token}))],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["response"]["json"], serde_json::Value::Null);

    let stored = app.documents.get(&stored_id(&app)).unwrap();
    assert_eq!(stored.grant, vec!["gooduser1".to_string()]);
}

#[tokio::test]
async fn test_upload_unparsable_json_echoed_as_string() {
    let (app, token) = app_with_user().await;

    let response = app
        .post_form(
            "/api/docs",
            &[
                meta(json!({"name": "notes", "token": token})),
                FormPart::text("json", "not json at all"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["response"]["json"], "not json at all");
}

#[tokio::test]
async fn test_upload_file_with_default_name() {
    let (app, token) = app_with_user().await;

    let response = app
        .post_form(
            "/api/docs",
            &[
                meta(json!({"file": true, "mime": "text/plain", "token": token})),
                FormPart::file("report.txt", b"hello world".to_vec()),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["response"]["file"], "report.txt");

    let id = stored_id(&app);
    let stored = app.documents.get(&id).unwrap();
    assert!(stored.is_file);
    assert_eq!(stored.mime, "text/plain");
    assert_eq!(stored.content.as_deref(), Some(&b"hello world"[..]));

    let cached = app.cached_document(&id.to_string()).await.expect("document cached");
    assert_eq!(cached["name"], "report.txt");
    assert!(cached.get("content").is_none());
}

#[tokio::test]
async fn test_upload_file_missing() {
    let (app, token) = app_with_user().await;

    let response = app
        .post_form(
            "/api/docs",
            &[meta(json!({"name": "a.bin", "file": true, "token": token}))],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_text(), "file is required");

    let response = app
        .post_form(
            "/api/docs",
            &[
                meta(json!({"name": "a.bin", "file": true, "token": token})),
                FormPart::file("a.bin", Vec::new()),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_text(), "file is required");

    assert!(app.documents.is_empty());
}

#[tokio::test]
async fn test_upload_meta_errors() {
    let (app, token) = app_with_user().await;

    let response = app
        .post_form("/api/docs", &[FormPart::text("json", "{}")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_text(), "meta required");

    let response = app
        .post_form("/api/docs", &[FormPart::text("meta", "{broken")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_text(), "invalid meta json");

    let response = app
        .post_form("/api/docs", &[meta(json!({"file": false, "token": token}))])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_text(), "name required");

    assert!(app.documents.is_empty());
}

#[tokio::test]
async fn test_upload_invalid_token() {
    let (app, _token) = app_with_user().await;

    let response = app
        .post_form(
            "/api/docs",
            &[meta(json!({"name": "a.txt", "token": "not-a-real-token"}))],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_text(), "invalid token");
    assert!(app.documents.is_empty());
}

#[tokio::test]
async fn test_upload_not_multipart() {
    let (app, _token) = app_with_user().await;

    let response = app
        .post_json("/api/docs", json!({"meta": {"name": "a.txt"}}), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_text(), "invalid form data");
}

#[tokio::test]
async fn test_upload_over_limit() {
    let app = TestApp::with_config(test_config(
        r#"
        [upload]
        max_upload_bytes = 4096
        "#,
    ))
    .await;
    let token = app.login_new_user("gooduser1", "Passw0rd!").await;

    let response = app
        .post_form(
            "/api/docs",
            &[
                meta(json!({"file": true, "token": token})),
                FormPart::file("big.bin", vec![7u8; 64 * 1024]),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_text(), "invalid form data");
    assert!(app.documents.is_empty());
}

#[tokio::test]
async fn test_upload_token_store_unavailable() {
    let app =
        TestApp::with_token_store(test_config(""), std::sync::Arc::new(UnavailableTokenStore)).await;

    let response = app
        .post_form(
            "/api/docs",
            &[meta(json!({"name": "a.txt", "token": "some-issued-token"}))],
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({"error": {"code": 500, "text": "internal server error"}})
    );
    assert!(app.documents.is_empty());
}
