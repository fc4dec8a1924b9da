//! Shared test helpers for integration tests.
//!
//! The application runs over the in-memory stores, so no Postgres or Redis
//! is needed.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use docvault_api::{AppState, build_router};
use docvault_cache::memory::MemoryCacheProvider;
use docvault_cache::{CacheDocumentCache, CacheTokenStore};
use docvault_core::config::AppConfig;
use docvault_core::traits::{CacheProvider, TokenStore};
use docvault_database::{MemoryDocumentStore, MemoryUserStore};

pub const ADMIN_TOKEN: &str = "test-admin-token";

const BOUNDARY: &str = "docvault-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    pub users: Arc<MemoryUserStore>,
    pub documents: Arc<MemoryDocumentStore>,
    /// Backend of the `doc:<id>` cache
    pub doc_cache: Arc<MemoryCacheProvider>,
    pub config: Arc<AppConfig>,
}

/// Status and parsed JSON body of a response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    /// `error.text` of an error body
    pub fn error_text(&self) -> &str {
        self.body["error"]["text"].as_str().unwrap_or_default()
    }
}

pub fn test_config(extra: &str) -> AppConfig {
    let source = format!(
        r#"
        [database]
        url = "postgres://unused"

        [cache]
        provider = "memory"

        [auth]
        admin_token = "{ADMIN_TOKEN}"
        hash_memory_kib = 1024
        hash_iterations = 1
        hash_parallelism = 1

        {extra}
        "#
    );
    AppConfig::from_toml(&source).expect("Failed to parse test config")
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        Self::with_config(test_config("")).await
    }

    pub async fn with_config(config: AppConfig) -> Self {
        let tokens = Arc::new(CacheTokenStore::new(
            Arc::new(MemoryCacheProvider::new(1000)),
            config.cache.timeout(),
        ));
        Self::with_token_store(config, tokens).await
    }

    /// Build the app around a specific token store.
    pub async fn with_token_store(config: AppConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let config = Arc::new(config);
        let users = Arc::new(MemoryUserStore::new());
        let documents = Arc::new(MemoryDocumentStore::new());
        let doc_cache = Arc::new(MemoryCacheProvider::new(1000));

        let document_cache = Arc::new(CacheDocumentCache::new(
            doc_cache.clone(),
            config.cache.document_ttl(),
            config.cache.timeout(),
        ));

        let state = AppState::from_stores(
            Arc::clone(&config),
            users.clone(),
            tokens,
            documents.clone(),
            document_cache,
        )
        .expect("Failed to build app state");

        Self {
            router: build_router(state),
            users,
            documents,
            doc_cache,
            config,
        }
    }

    /// Register a user through the API with the admin credential.
    pub async fn register(&self, login: &str, password: &str) -> TestResponse {
        self.post_json(
            "/api/register",
            serde_json::json!({"login": login, "pswd": password}),
            Some(ADMIN_TOKEN),
        )
        .await
    }

    /// Register and log in, returning the bearer token.
    pub async fn login_new_user(&self, login: &str, password: &str) -> String {
        let response = self.register(login, password).await;
        assert_eq!(response.status, StatusCode::OK, "Register failed: {:?}", response.body);

        let response = self
            .post_json(
                "/api/auth",
                serde_json::json!({"login": login, "pswd": password}),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "Login failed: {:?}", response.body);

        response.body["response"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    pub async fn post_json(&self, path: &str, body: Value, bearer: Option<&str>) -> TestResponse {
        self.post_raw(path, "application/json", body.to_string().into_bytes(), bearer)
            .await
    }

    /// POST a multipart form built from `parts`.
    pub async fn post_form(&self, path: &str, parts: &[FormPart]) -> TestResponse {
        self.post_raw(
            path,
            &format!("multipart/form-data; boundary={BOUNDARY}"),
            multipart_body(parts),
            None,
        )
        .await
    }

    pub async fn post_raw(
        &self,
        path: &str,
        content_type: &str,
        body: Vec<u8>,
        bearer: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", content_type);

        if let Some(token) = bearer {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");
        self.send(req).await
    }

    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Wait for the detached cache task to write `doc:<id>`.
    pub async fn cached_document(&self, id: &str) -> Option<Value> {
        for _ in 0..50 {
            if let Some(raw) = self.doc_cache.get(&format!("doc:{id}")).await.unwrap() {
                return serde_json::from_str(&raw).ok();
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        None
    }
}

/// One part of a multipart form.
pub struct FormPart {
    pub name: &'static str,
    pub file_name: Option<&'static str>,
    pub content: Vec<u8>,
}

impl FormPart {
    pub fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            file_name: None,
            content: value.into().into_bytes(),
        }
    }

    pub fn file(file_name: &'static str, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: "file",
            file_name: Some(file_name),
            content: content.into(),
        }
    }
}

pub fn multipart_body(parts: &[FormPart]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part.file_name {
            Some(file_name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                    part.name
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", part.name)
                    .as_bytes(),
            ),
        }
        body.extend_from_slice(&part.content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// A token store whose backend never answers in time.
#[derive(Debug)]
pub struct UnavailableTokenStore;

#[async_trait::async_trait]
impl TokenStore for UnavailableTokenStore {
    async fn save_token(
        &self,
        _login: &str,
        _token_hash: &str,
        _ttl: Duration,
    ) -> docvault_core::AppResult<()> {
        Err(docvault_core::AppError::service_unavailable(
            "token save timed out after 1000ms",
        ))
    }

    async fn resolve_login(&self, _token_hash: &str) -> docvault_core::AppResult<Option<String>> {
        Err(docvault_core::AppError::service_unavailable(
            "token lookup timed out after 1000ms",
        ))
    }
}
