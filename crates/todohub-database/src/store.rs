//! Store traits shared by the PostgreSQL and in-memory backends.

use async_trait::async_trait;

use todohub_core::result::AppResult;
use todohub_core::types::{TodoFilter, TodoId, UserId};
use todohub_entity::todo::{NewTodo, Todo, TodoChanges};
use todohub_entity::user::{NewUser, User, UserChanges};

/// Credential storage.
///
/// Emails are stored lower-cased and are unique; a duplicate insert fails
/// with a `Conflict` error rather than overwriting.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new user and return the stored row.
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by email, compared case-insensitively.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Overwrite the supplied profile fields and refresh `updated_at`.
    ///
    /// Returns `None` when the user does not exist.
    async fn update_profile(&self, id: UserId, changes: UserChanges) -> AppResult<Option<User>>;
}

/// Result of a guarded todo update.
#[derive(Debug, Clone)]
pub enum UpdateOutcome {
    /// The write went through; carries the row after the update.
    Updated(Todo),
    /// No todo with that id.
    NotFound,
    /// The todo is owned by someone other than the claimant.
    Rejected,
}

/// Result of a guarded todo delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// No todo with that id.
    NotFound,
    /// The todo is owned by someone other than the requester.
    Rejected,
}

/// Todo storage.
#[async_trait]
pub trait TodoStore: Send + Sync + std::fmt::Debug + 'static {
    /// List todos matching the filter, newest first.
    async fn list(&self, filter: &TodoFilter) -> AppResult<Vec<Todo>>;

    /// Insert a new todo and return the stored row.
    async fn insert(&self, todo: NewTodo) -> AppResult<Todo>;

    /// Find a todo by primary key.
    async fn find_by_id(&self, id: TodoId) -> AppResult<Option<Todo>>;

    /// Apply a change set in a single write.
    ///
    /// When `changes.claim_for` is set the write only happens if the todo
    /// is unowned or already owned by that user, and an unowned todo is
    /// assigned to them in the same write.
    async fn update(&self, id: TodoId, changes: &TodoChanges) -> AppResult<UpdateOutcome>;

    /// Delete a todo in a single write, only if it is unowned or owned by
    /// `requester`. An anonymous requester can only delete unowned todos.
    async fn delete(&self, id: TodoId, requester: Option<UserId>) -> AppResult<DeleteOutcome>;
}
