//! Integration tests for registration, login, and the profile endpoints.

mod helpers;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use helpers::TestApp;
use todohub_auth::JwtEncoder;
use todohub_core::types::UserId;

#[tokio::test]
async fn test_register_returns_token_and_user() {
    let app = TestApp::new();

    let res = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "name": "  Ann  ",
                "email": "Ann@Example.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(res.status, StatusCode::CREATED);
    assert!(res.body["token"].as_str().is_some_and(|t| !t.is_empty()));

    let user = &res.body["user"];
    assert_eq!(user["name"], "Ann");
    assert_eq!(user["email"], "ann@example.com");
    assert_eq!(user["username"], "Ann");
    assert!(user["_id"].is_string());
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.register("Ann", "ann@example.com", "secret1").await;

    let res = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "name": "Another Ann",
                "email": "ANN@example.com",
                "password": "secret2",
            })),
            None,
        )
        .await;

    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(res.message(), "Email already registered");
}

#[tokio::test]
async fn test_register_validation_messages() {
    let app = TestApp::new();

    let cases = [
        (
            json!({ "name": "A", "email": "a@b.co", "password": "secret1" }),
            "Name must be at least 2 characters",
        ),
        (
            json!({ "name": "Ann", "email": "not-an-email", "password": "secret1" }),
            "Invalid email",
        ),
        (
            json!({ "name": "Ann", "email": "ann@example.com", "password": "123" }),
            "Password must be at least 6 characters",
        ),
        // Name is checked before the other fields.
        (
            json!({ "name": "", "email": "bad", "password": "1" }),
            "Name must be at least 2 characters",
        ),
    ];

    for (body, expected) in cases {
        let res = app
            .request("POST", "/api/auth/register", Some(body), None)
            .await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.error_code(), "VALIDATION_ERROR");
        assert_eq!(res.message(), expected);
    }
}

#[tokio::test]
async fn test_register_rejects_malformed_json() {
    let app = TestApp::new();

    let res = app
        .request_raw("POST", "/api/auth/register", "{\"name\":", None)
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.message(), "Invalid body");
}

#[tokio::test]
async fn test_login_success_and_failure() {
    let app = TestApp::new();
    let (_, user) = app.register("Ann", "ann@example.com", "secret1").await;

    let ok = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "ANN@example.com", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(ok.status, StatusCode::OK);
    assert!(ok.body["token"].is_string());
    assert_eq!(ok.body["user"]["_id"], user["_id"]);

    let wrong_password = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "ann@example.com", "password": "wrong-one" })),
            None,
        )
        .await;
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.message(), "Invalid credentials");

    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "nobody@example.com", "password": "secret1" })),
            None,
        )
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.message(), "Invalid credentials");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new();
    let (token, user) = app.register("Ann", "ann@example.com", "secret1").await;

    let res = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["_id"], user["_id"]);
    assert_eq!(res.body["email"], "ann@example.com");

    let anonymous = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
    assert_eq!(anonymous.message(), "Missing Authorization header");

    let garbage = app
        .request("GET", "/api/auth/me", None, Some("not.a.jwt"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.message(), "Invalid token");
}

#[tokio::test]
async fn test_me_rejects_malformed_header() {
    let app = TestApp::new();
    let (token, _) = app.register("Ann", "ann@example.com", "secret1").await;

    let res = app
        .request_raw("GET", "/api/auth/me", "", Some(&format!("Token {}", token)))
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.message(), "Invalid Authorization header");

    let lowercase = app
        .request_raw("GET", "/api/auth/me", "", Some(&format!("bearer {}", token)))
        .await;
    assert_eq!(lowercase.status, StatusCode::OK);
}

#[tokio::test]
async fn test_me_rejects_expired_token() {
    let app = TestApp::new();
    let (_, user) = app.register("Ann", "ann@example.com", "secret1").await;
    let user_id = UserId::parse(user["_id"].as_str().expect("user id")).expect("valid id");

    let encoder = JwtEncoder::new(&app.config.auth);
    let issued = Utc::now() - encoder.ttl() - Duration::minutes(5);
    let expired = encoder.issue_at(user_id, issued).expect("issue token");

    let res = app
        .request("GET", "/api/auth/me", None, Some(&expired))
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.message(), "Invalid token");
}

#[tokio::test]
async fn test_token_for_unknown_user_is_not_found() {
    let app = TestApp::new();

    let encoder = JwtEncoder::new(&app.config.auth);
    let token = encoder.issue(UserId::new()).expect("issue token");

    let res = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.message(), "User not found");
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new();
    let (token, _) = app.register("Ann", "ann@example.com", "secret1").await;

    let res = app
        .request(
            "PATCH",
            "/api/auth/me",
            Some(json!({ "name": "Ann Smith", "username": "annie" })),
            Some(&token),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "Ann Smith");
    assert_eq!(res.body["username"], "annie");
    assert_eq!(res.body["email"], "ann@example.com");

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.body["username"], "annie");
}

#[tokio::test]
async fn test_update_profile_without_changes() {
    let app = TestApp::new();
    let (token, _) = app.register("Ann", "ann@example.com", "secret1").await;

    for body in [json!({}), json!({ "name": "   ", "username": "" })] {
        let res = app
            .request("PATCH", "/api/auth/me", Some(body), Some(&token))
            .await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.error_code(), "NO_CHANGES");
        assert_eq!(res.message(), "No changes");
    }
}
