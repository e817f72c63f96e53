//! Result alias shared by every TodoHub crate.

use crate::error::AppError;

/// `Result` specialized to [`AppError`], returned by stores, services, and
/// handlers alike.
pub type AppResult<T> = Result<T, AppError>;
