//! Bearer-token extractors.
//!
//! [`AuthUser`] rejects requests without a valid token. [`MaybeAuthUser`]
//! treats any missing, malformed or invalid token as an anonymous caller.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use todohub_core::error::AppError;
use todohub_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Caller identity when a valid token was sent, `None` otherwise.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<RequestContext>);

impl MaybeAuthUser {
    pub fn context(&self) -> Option<&RequestContext> {
        self.0.as_ref()
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively; everything after the first
/// space is the token.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let header = match parts.headers.get(AUTHORIZATION) {
        None => return Err(AppError::unauthenticated("Missing Authorization header")),
        Some(value) if value.is_empty() => {
            return Err(AppError::unauthenticated("Missing Authorization header"));
        }
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::unauthenticated("Invalid Authorization header"))?,
    };

    match header.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AppError::unauthenticated("Invalid Authorization header")),
    }
}

fn authenticate(parts: &Parts, state: &AppState) -> Result<RequestContext, AppError> {
    let token = bearer_token(parts)?;
    let user_id = state.jwt_decoder.verify(token).map_err(|e| {
        debug!(reason = %e.message, "Bearer token rejected");
        AppError::unauthenticated("Invalid token")
    })?;
    Ok(RequestContext::new(user_id))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(parts, state).map(AuthUser)
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(authenticate(parts, state).ok()))
    }
}
