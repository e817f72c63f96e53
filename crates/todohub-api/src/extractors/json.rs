//! JSON body extractors that report malformed input as `AppError`.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use todohub_core::error::AppError;

fn invalid_body() -> AppError {
    AppError::validation("Invalid body")
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        invalid_body()
    })
}

/// Required JSON body. Empty or malformed bodies are rejected.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| invalid_body())?;
        parse(&bytes).map(JsonBody)
    }
}

/// Partial-update JSON body. An empty body yields `T::default()`.
#[derive(Debug, Clone)]
pub struct PatchBody<T>(pub T);

impl<S, T> FromRequest<S> for PatchBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| invalid_body())?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(PatchBody(T::default()));
        }
        parse(&bytes).map(PatchBody)
    }
}
