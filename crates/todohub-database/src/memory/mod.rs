//! In-memory store implementations backed by [`dashmap`].
//!
//! Data lives only as long as the process. The semantics match the
//! PostgreSQL repositories: unique emails, guarded claims, newest-first
//! listing.

pub mod todo;
pub mod user;

pub use todo::MemoryTodoStore;
pub use user::MemoryUserStore;
