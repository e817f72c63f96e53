//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use todohub_api::{AppState, build_app};
use todohub_core::config::AppConfig;
use todohub_database::StoreManager;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application on empty in-memory stores.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = "memory".to_string();
        config.auth.jwt_secret = TEST_SECRET.to_string();

        let state = AppState::new(config.clone(), StoreManager::memory());
        Self {
            router: build_app(state),
            config,
        }
    }

    /// Register an account and return `(token, user)`.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> (String, Value) {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "name": name,
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

        let token = response.body["token"]
            .as_str()
            .expect("token in register response")
            .to_string();
        (token, response.body["user"].clone())
    }

    /// Create a todo with the given token and return it.
    ///
    /// `POST /api/todos` requires authentication, so anonymous todos are
    /// not reachable through this helper.
    pub async fn create_todo(&self, token: &str, body: Value) -> Value {
        let response = self
            .request("POST", "/api/todos", Some(body), Some(token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body
    }

    /// Send a JSON request, optionally with a bearer token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let authorization = token.map(|t| format!("Bearer {}", t));
        self.request_raw(method, path, &body_str, authorization.as_deref())
            .await
    }

    /// Send a request with a literal body and `Authorization` header value.
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: &str,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` if the body was not JSON)
    pub body: Value,
}

impl TestResponse {
    /// The machine-readable error code of an error response.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }

    /// The message of an error response.
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}
