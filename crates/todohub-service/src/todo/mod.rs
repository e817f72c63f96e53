//! Todo listing and the ownership/mutation rules.

pub mod service;

pub use service::{NewTodoInput, TodoQuery, TodoService, TodoUpdate};
