//! Route definitions for the TodoHub HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with state applied. Middleware is added by
/// [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(todo_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Auth endpoints: register, login, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route(
            "/auth/me",
            get(handlers::auth::me).patch(handlers::auth::update_me),
        )
}

/// Todo CRUD and starring
fn todo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            get(handlers::todo::list_todos).post(handlers::todo::create_todo),
        )
        .route(
            "/todos/{id}",
            patch(handlers::todo::update_todo).delete(handlers::todo::delete_todo),
        )
        .route("/todos/{id}/star", patch(handlers::todo::star_todo))
}

/// Health checks
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
