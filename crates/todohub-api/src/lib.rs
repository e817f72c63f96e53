//! # todohub-api
//!
//! HTTP API layer for TodoHub built on Axum.
//!
//! Provides the REST endpoints, bearer-token extractors, request logging,
//! CORS, DTOs, and the mapping from `AppError` to JSON error responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
