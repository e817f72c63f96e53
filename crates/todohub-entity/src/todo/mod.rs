//! Todo domain entities.

pub mod changes;
pub mod model;

pub use changes::{CompletionChange, TodoChanges};
pub use model::{NewTodo, Todo};
