//! # todohub-core
//!
//! Core crate for TodoHub. Contains configuration schemas, typed
//! identifiers, todo query filters, and the unified error system.
//!
//! This crate has **no** internal dependencies on other TodoHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
