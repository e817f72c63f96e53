//! Integration tests for todo CRUD, claim-on-star, and listing scope.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use helpers::TestApp;
use todohub_core::types::TodoId;

const FUTURE: &str = "2999-01-01T00:00:00Z";
const PAST: &str = "2000-01-01T00:00:00Z";

fn id_of(todo: &Value) -> String {
    todo["_id"].as_str().expect("todo id").to_string()
}

async fn find(app: &TestApp, token: Option<&str>, id: &str) -> Value {
    let res = app.request("GET", "/api/todos", None, token).await;
    assert_eq!(res.status, StatusCode::OK);
    res.body
        .as_array()
        .expect("todo list")
        .iter()
        .find(|t| t["_id"] == id)
        .cloned()
        .unwrap_or(Value::Null)
}

#[tokio::test]
async fn test_create_todo_owned_by_caller() {
    let app = TestApp::new();
    let (token, user) = app.register("Ann", "ann@example.com", "secret1").await;

    let todo = app
        .create_todo(
            &token,
            json!({ "body": "Buy milk", "priority": "high", "dueDate": FUTURE }),
        )
        .await;

    assert_eq!(todo["body"], "Buy milk");
    assert_eq!(todo["priority"], "high");
    assert_eq!(todo["completed"], false);
    assert_eq!(todo["starred"], false);
    assert_eq!(todo["ownerId"], user["_id"]);
    assert!(todo["dueDate"].is_string());
    assert!(todo["createdAt"].is_string());
    assert!(todo.get("completedAt").is_none());
}

#[tokio::test]
async fn test_create_todo_requires_auth_and_body() {
    let app = TestApp::new();

    let anonymous = app
        .request("POST", "/api/todos", Some(json!({ "body": "x" })), None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let (token, _) = app.register("Ann", "ann@example.com", "secret1").await;
    for body in [json!({ "body": "" }), json!({ "body": "   " }), json!({})] {
        let res = app
            .request("POST", "/api/todos", Some(body), Some(&token))
            .await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.message(), "Todo body cannot be empty");
    }
}

#[tokio::test]
async fn test_star_by_other_user_is_forbidden() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;
    let (bob, _) = app.register("Bob", "bob@example.com", "secret1").await;

    let todo = app.create_todo(&ann, json!({ "body": "Ann's task" })).await;
    let id = id_of(&todo);

    let res = app
        .request("PATCH", &format!("/api/todos/{}/star", id), None, Some(&ann))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "success": true }));

    let res = app
        .request(
            "PATCH",
            &format!("/api/todos/{}/star", id),
            Some(json!({ "starred": false })),
            Some(&bob),
        )
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.message(), "You do not own this todo");

    let res = app
        .request(
            "PATCH",
            &format!("/api/todos/{}", id),
            Some(json!({ "starred": false })),
            Some(&bob),
        )
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);

    let stored = find(&app, Some(&ann), &id).await;
    assert_eq!(stored["starred"], true);
}

#[tokio::test]
async fn test_star_requires_auth() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;
    let id = id_of(&app.create_todo(&ann, json!({ "body": "task" })).await);

    let star = app
        .request("PATCH", &format!("/api/todos/{}/star", id), None, None)
        .await;
    assert_eq!(star.status, StatusCode::UNAUTHORIZED);

    let via_update = app
        .request(
            "PATCH",
            &format!("/api/todos/{}", id),
            Some(json!({ "starred": true })),
            None,
        )
        .await;
    assert_eq!(via_update.status, StatusCode::UNAUTHORIZED);
    assert_eq!(via_update.message(), "Authentication required");
}

#[tokio::test]
async fn test_star_and_unstar() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;
    let id = id_of(&app.create_todo(&ann, json!({ "body": "task" })).await);

    app.request(
        "PATCH",
        &format!("/api/todos/{}/star", id),
        Some(json!({ "starred": true })),
        Some(&ann),
    )
    .await;
    assert_eq!(find(&app, Some(&ann), &id).await["starred"], true);

    let res = app
        .request(
            "PATCH",
            &format!("/api/todos/{}/star", id),
            Some(json!({ "starred": false })),
            Some(&ann),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(find(&app, Some(&ann), &id).await["starred"], false);
}

#[tokio::test]
async fn test_empty_patch_toggles_completion() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;
    let id = id_of(&app.create_todo(&ann, json!({ "body": "task" })).await);
    let path = format!("/api/todos/{}", id);

    let res = app.request("PATCH", &path, None, None).await;
    assert_eq!(res.status, StatusCode::OK);
    let stored = find(&app, None, &id).await;
    assert_eq!(stored["completed"], true);
    assert!(stored["completedAt"].is_string());

    let res = app.request("PATCH", &path, Some(json!({})), None).await;
    assert_eq!(res.status, StatusCode::OK);
    let stored = find(&app, None, &id).await;
    assert_eq!(stored["completed"], false);
    assert!(stored.get("completedAt").is_none());
}

#[tokio::test]
async fn test_explicit_completed_flag() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;
    let id = id_of(&app.create_todo(&ann, json!({ "body": "task" })).await);
    let path = format!("/api/todos/{}", id);

    for _ in 0..2 {
        let res = app
            .request("PATCH", &path, Some(json!({ "completed": true })), Some(&ann))
            .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(find(&app, Some(&ann), &id).await["completed"], true);
    }
}

#[tokio::test]
async fn test_update_fields() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;
    let id = id_of(
        &app.create_todo(&ann, json!({ "body": "old", "dueDate": FUTURE }))
            .await,
    );
    let path = format!("/api/todos/{}", id);

    let res = app
        .request(
            "PATCH",
            &path,
            Some(json!({ "body": "new", "priority": "low" })),
            Some(&ann),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);

    let stored = find(&app, Some(&ann), &id).await;
    assert_eq!(stored["body"], "new");
    assert_eq!(stored["priority"], "low");
    assert_eq!(stored["completed"], false);
    assert!(stored["dueDate"].is_string());

    let res = app
        .request("PATCH", &path, Some(json!({ "dueDate": null })), Some(&ann))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(find(&app, Some(&ann), &id).await.get("dueDate").is_none());
}

#[tokio::test]
async fn test_update_rejects_blank_body() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;
    let id = id_of(&app.create_todo(&ann, json!({ "body": "keep me" })).await);
    let path = format!("/api/todos/{}", id);

    for body in ["", "  "] {
        let res = app
            .request("PATCH", &path, Some(json!({ "body": body })), Some(&ann))
            .await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.error_code(), "VALIDATION_ERROR");
        assert_eq!(res.message(), "Todo body cannot be empty");
    }

    assert_eq!(find(&app, Some(&ann), &id).await["body"], "keep me");
}

#[tokio::test]
async fn test_empty_priority_is_dropped() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;

    let unranked = app
        .create_todo(&ann, json!({ "body": "unranked", "priority": "" }))
        .await;
    assert!(unranked.get("priority").is_none());

    let id = id_of(
        &app.create_todo(&ann, json!({ "body": "ranked", "priority": "high" }))
            .await,
    );
    let res = app
        .request(
            "PATCH",
            &format!("/api/todos/{}", id),
            Some(json!({ "priority": "" })),
            Some(&ann),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);

    let stored = find(&app, Some(&ann), &id).await;
    assert!(stored.get("priority").is_none());
    assert_eq!(stored["completed"], false);
}

#[tokio::test]
async fn test_update_rejects_past_due_date() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;
    let id = id_of(&app.create_todo(&ann, json!({ "body": "task" })).await);

    let res = app
        .request(
            "PATCH",
            &format!("/api/todos/{}", id),
            Some(json!({ "dueDate": PAST })),
            Some(&ann),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.message(), "Due date cannot be in the past");
}

#[tokio::test]
async fn test_update_invalid_and_missing_ids() {
    let app = TestApp::new();

    let invalid = app
        .request("PATCH", "/api/todos/not-an-id", Some(json!({ "body": "x" })), None)
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.error_code(), "INVALID_ARGUMENT");
    assert_eq!(invalid.message(), "Invalid todo ID");

    let missing_path = format!("/api/todos/{}", TodoId::new());

    let toggle = app.request("PATCH", &missing_path, None, None).await;
    assert_eq!(toggle.status, StatusCode::NOT_FOUND);
    assert_eq!(toggle.message(), "Todo not found");

    let update = app
        .request("PATCH", &missing_path, Some(json!({ "body": "x" })), None)
        .await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rejects_malformed_json() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;
    let id = id_of(&app.create_todo(&ann, json!({ "body": "task" })).await);

    let res = app
        .request_raw("PATCH", &format!("/api/todos/{}", id), "{not json", None)
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.message(), "Invalid body");

    assert_eq!(find(&app, None, &id).await["completed"], false);
}

#[tokio::test]
async fn test_delete_rules() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;
    let (bob, _) = app.register("Bob", "bob@example.com", "secret1").await;
    let id = id_of(&app.create_todo(&ann, json!({ "body": "task" })).await);
    let path = format!("/api/todos/{}", id);

    let anonymous = app.request("DELETE", &path, None, None).await;
    assert_eq!(anonymous.status, StatusCode::FORBIDDEN);

    let other = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(other.status, StatusCode::FORBIDDEN);

    let owner = app.request("DELETE", &path, None, Some(&ann)).await;
    assert_eq!(owner.status, StatusCode::OK);
    assert_eq!(owner.body, json!({ "success": true }));

    let again = app.request("DELETE", &path, None, Some(&ann)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let invalid = app.request("DELETE", "/api/todos/123", None, Some(&ann)).await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_listing_scope_and_order() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;
    let (bob, _) = app.register("Bob", "bob@example.com", "secret1").await;

    let first = id_of(&app.create_todo(&ann, json!({ "body": "first" })).await);
    let second = id_of(&app.create_todo(&ann, json!({ "body": "second" })).await);
    let bobs = id_of(&app.create_todo(&bob, json!({ "body": "bob's" })).await);

    let everyone = app.request("GET", "/api/todos", None, None).await;
    let ids: Vec<_> = everyone
        .body
        .as_array()
        .expect("todo list")
        .iter()
        .map(id_of)
        .collect();
    assert_eq!(ids, vec![bobs.clone(), second.clone(), first.clone()]);

    let mine = app.request("GET", "/api/todos", None, Some(&ann)).await;
    let ids: Vec<_> = mine
        .body
        .as_array()
        .expect("todo list")
        .iter()
        .map(id_of)
        .collect();
    assert_eq!(ids, vec![second, first]);
}

#[tokio::test]
async fn test_listing_filters() {
    let app = TestApp::new();
    let (ann, _) = app.register("Ann", "ann@example.com", "secret1").await;

    let milk = id_of(
        &app.create_todo(&ann, json!({ "body": "Buy milk", "priority": "high" }))
            .await,
    );
    let bread = id_of(
        &app.create_todo(&ann, json!({ "body": "buy bread", "priority": "low" }))
            .await,
    );
    let walk = id_of(&app.create_todo(&ann, json!({ "body": "Walk the dog" })).await);

    app.request(
        "PATCH",
        &format!("/api/todos/{}", walk),
        Some(json!({ "completed": true })),
        Some(&ann),
    )
    .await;

    let ids = |res: &helpers::TestResponse| -> Vec<String> {
        res.body
            .as_array()
            .expect("todo list")
            .iter()
            .map(id_of)
            .collect()
    };

    let search = app
        .request("GET", "/api/todos?search=%5Ebuy", None, Some(&ann))
        .await;
    assert_eq!(ids(&search), vec![bread.clone(), milk.clone()]);

    let completed = app
        .request("GET", "/api/todos?status=completed", None, Some(&ann))
        .await;
    assert_eq!(ids(&completed), vec![walk.clone()]);

    let active = app
        .request("GET", "/api/todos?status=active", None, Some(&ann))
        .await;
    assert_eq!(ids(&active), vec![bread.clone(), milk.clone()]);

    let unknown_status = app
        .request("GET", "/api/todos?status=all&priority=", None, Some(&ann))
        .await;
    assert_eq!(ids(&unknown_status).len(), 3);

    let high = app
        .request("GET", "/api/todos?priority=high", None, Some(&ann))
        .await;
    assert_eq!(ids(&high), vec![milk]);

    let invalid = app
        .request("GET", "/api/todos?search=%28", None, Some(&ann))
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.message(), "Invalid search pattern");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let res = app.request("GET", "/api/health", None, None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert!(res.body["version"].is_string());
}
