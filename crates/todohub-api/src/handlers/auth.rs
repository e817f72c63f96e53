//! Auth handlers for register, login, and the current user's profile.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use todohub_core::error::AppError;
use todohub_entity::user::User;

use crate::dto::request::{LoginRequest, RegisterRequest, UpdateProfileRequest};
use crate::dto::response::AuthResponse;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let session = state.user_service.register(req.into()).await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let session = state
        .user_service
        .login(&req.email, &req.password)
        .await?;
    Ok(Json(session.into()))
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> Result<Json<User>, AppError> {
    let user = state.user_service.get_profile(auth.context()).await?;
    Ok(Json(user))
}

/// PATCH /api/auth/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<UpdateProfileRequest>,
) -> Result<Json<User>, AppError> {
    let user = state
        .user_service
        .update_profile(auth.context(), req.into())
        .await?;
    Ok(Json(user))
}
