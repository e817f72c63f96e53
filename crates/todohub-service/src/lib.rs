//! # todohub-service
//!
//! Business logic service layer for TodoHub. [`UserService`] owns account
//! registration, login and profiles; [`TodoService`] owns the todo
//! ownership and mutation rules.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod todo;
pub mod user;

pub use context::RequestContext;
pub use todo::TodoService;
pub use user::UserService;
