//! Todo handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use todohub_core::error::AppError;
use todohub_entity::todo::Todo;

use crate::dto::request::{CreateTodoRequest, ListTodosQuery, StarRequest, UpdateTodoRequest};
use crate::dto::response::SuccessResponse;
use crate::extractors::{AuthUser, JsonBody, MaybeAuthUser, PatchBody};
use crate::state::AppState;

/// GET /api/todos
pub async fn list_todos(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    Query(query): Query<ListTodosQuery>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state
        .todo_service
        .list(query.into(), auth.context())
        .await?;
    Ok(Json(todos))
}

/// POST /api/todos
pub async fn create_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = state
        .todo_service
        .create(req.into(), Some(auth.context()))
        .await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PATCH /api/todos/{id}
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: MaybeAuthUser,
    PatchBody(req): PatchBody<UpdateTodoRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .todo_service
        .update(&id, req.into(), auth.context())
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

/// PATCH /api/todos/{id}/star
pub async fn star_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: AuthUser,
    PatchBody(req): PatchBody<StarRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    state
        .todo_service
        .set_starred(&id, req.starred, auth.context())
        .await?;
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: MaybeAuthUser,
) -> Result<Json<SuccessResponse>, AppError> {
    state.todo_service.delete(&id, auth.context()).await?;
    Ok(Json(SuccessResponse::ok()))
}
