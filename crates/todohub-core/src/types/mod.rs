//! Core type definitions used across the TodoHub workspace.

pub mod filter;
pub mod id;

pub use filter::{StatusFilter, TodoFilter, Visibility};
pub use id::*;
