//! # todohub-entity
//!
//! Domain entity models for TodoHub. Every persisted struct derives
//! `Debug`, `Clone`, `Serialize`, and `sqlx::FromRow`; the insert and
//! change-set types describe writes handed to the stores.

pub mod todo;
pub mod user;
