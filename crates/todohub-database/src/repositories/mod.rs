//! PostgreSQL implementations of the store traits.

pub mod todo;
pub mod user;

pub use todo::TodoRepository;
pub use user::UserRepository;
