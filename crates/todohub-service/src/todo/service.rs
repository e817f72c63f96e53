//! Todo service: listing, creation, partial updates, starring and
//! deletion under the single-owner rules.
//!
//! Ownership moves from unowned to a user exactly once, either at creation
//! by an authenticated caller or when an authenticated caller stars an
//! unowned todo. It is never reassigned afterwards.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use regex::RegexBuilder;
use tracing::{debug, info};

use todohub_core::error::AppError;
use todohub_core::types::{StatusFilter, TodoFilter, TodoId, Visibility};
use todohub_database::{DeleteOutcome, TodoStore, UpdateOutcome};
use todohub_entity::todo::{CompletionChange, NewTodo, Todo, TodoChanges};

use crate::context::RequestContext;

/// Raw listing parameters as received from the client.
#[derive(Debug, Clone, Default)]
pub struct TodoQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Input for creating a todo.
#[derive(Debug, Clone, Default)]
pub struct NewTodoInput {
    pub body: String,
    pub priority: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub starred: Option<bool>,
}

/// Partial update. `due_date: Some(None)` clears the date.
#[derive(Debug, Clone, Default)]
pub struct TodoUpdate {
    pub body: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub completed: Option<bool>,
    pub starred: Option<bool>,
}

impl TodoUpdate {
    /// An update naming no field at all toggles completion.
    pub fn is_empty(&self) -> bool {
        self.body.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.completed.is_none()
            && self.starred.is_none()
    }
}

/// Applies the todo ownership and mutation rules on top of a [`TodoStore`].
#[derive(Debug, Clone)]
pub struct TodoService {
    todos: Arc<dyn TodoStore>,
}

fn parse_id(raw: &str) -> Result<TodoId, AppError> {
    TodoId::parse(raw).ok_or_else(|| AppError::invalid_argument("Invalid todo ID"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Bodies must contain something other than whitespace.
fn check_body(body: &str) -> Result<(), AppError> {
    if body.trim().is_empty() {
        return Err(AppError::validation("Todo body cannot be empty"));
    }
    Ok(())
}

fn todo_not_found() -> AppError {
    AppError::not_found("Todo not found")
}

fn not_owner() -> AppError {
    AppError::forbidden("You do not own this todo")
}

/// Due dates compare by calendar day in UTC; today is allowed.
fn check_due_date(due: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), AppError> {
    if due.date_naive() < now.date_naive() {
        return Err(AppError::validation("Due date cannot be in the past"));
    }
    Ok(())
}

impl TodoService {
    pub fn new(todos: Arc<dyn TodoStore>) -> Self {
        Self { todos }
    }

    /// Lists todos, newest first.
    ///
    /// Authenticated callers see their own todos plus unowned ones;
    /// anonymous callers see everything.
    pub async fn list(
        &self,
        query: TodoQuery,
        ctx: Option<&RequestContext>,
    ) -> Result<Vec<Todo>, AppError> {
        let search = non_empty(query.search);
        if let Some(pattern) = &search {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|_| AppError::validation("Invalid search pattern"))?;
        }

        let filter = TodoFilter {
            search,
            status: query.status.as_deref().and_then(StatusFilter::from_query),
            priority: non_empty(query.priority),
            visibility: match ctx {
                Some(ctx) => Visibility::OwnerOrUnowned(ctx.user_id),
                None => Visibility::Everyone,
            },
        };

        self.todos.list(&filter).await
    }

    /// Creates a todo, owned by the caller when authenticated.
    pub async fn create(
        &self,
        input: NewTodoInput,
        ctx: Option<&RequestContext>,
    ) -> Result<Todo, AppError> {
        check_body(&input.body)?;

        let todo = self
            .todos
            .insert(NewTodo {
                body: input.body,
                priority: non_empty(input.priority),
                due_date: input.due_date,
                starred: input.starred.unwrap_or(false),
                owner_id: ctx.map(|c| c.user_id),
            })
            .await?;

        info!(todo_id = %todo.id, owner_id = ?todo.owner_id, "Todo created");
        Ok(todo)
    }

    /// Applies a partial update.
    ///
    /// Starring requires an authenticated caller and claims an unowned
    /// todo in the same write. An update naming no fields toggles
    /// completion.
    pub async fn update(
        &self,
        id: &str,
        update: TodoUpdate,
        ctx: Option<&RequestContext>,
    ) -> Result<Todo, AppError> {
        let id = parse_id(id)?;
        let now = Utc::now();
        let mut changes = TodoChanges::at(now);

        if update.is_empty() {
            // Read-then-write: two concurrent toggles can cancel out.
            let current = self.todos.find_by_id(id).await?.ok_or_else(todo_not_found)?;
            changes.completion = Some(CompletionChange::from_flag(!current.completed, now));
            debug!(todo_id = %id, completed = !current.completed, "Toggling completion");
            return self.write(id, &changes).await;
        }

        if let Some(body) = &update.body {
            check_body(body)?;
        }
        if let Some(Some(due)) = update.due_date {
            check_due_date(due, now)?;
        }

        if let Some(starred) = update.starred {
            let ctx = ctx.ok_or_else(|| AppError::unauthenticated("Authentication required"))?;
            let current = self.todos.find_by_id(id).await?.ok_or_else(todo_not_found)?;
            if !current.is_accessible_by(Some(ctx.user_id)) {
                return Err(not_owner());
            }
            changes.starred = Some(starred);
            changes.claim_for = Some(ctx.user_id);
        }

        changes.body = update.body;
        // An empty priority clears it, matching `create`.
        changes.priority = update.priority.map(|p| non_empty(Some(p)));
        changes.due_date = update.due_date;
        changes.completion = update
            .completed
            .map(|completed| CompletionChange::from_flag(completed, now));

        self.write(id, &changes).await
    }

    /// Stars or unstars a todo, claiming it if unowned.
    pub async fn set_starred(
        &self,
        id: &str,
        starred: bool,
        ctx: &RequestContext,
    ) -> Result<Todo, AppError> {
        self.update(
            id,
            TodoUpdate {
                starred: Some(starred),
                ..Default::default()
            },
            Some(ctx),
        )
        .await
    }

    /// Deletes a todo. Owned todos can only be deleted by their owner.
    pub async fn delete(&self, id: &str, ctx: Option<&RequestContext>) -> Result<(), AppError> {
        let id = parse_id(id)?;

        match self.todos.delete(id, ctx.map(|c| c.user_id)).await? {
            DeleteOutcome::Deleted => {
                info!(todo_id = %id, "Todo deleted");
                Ok(())
            }
            DeleteOutcome::NotFound => Err(todo_not_found()),
            DeleteOutcome::Rejected => Err(not_owner()),
        }
    }

    async fn write(&self, id: TodoId, changes: &TodoChanges) -> Result<Todo, AppError> {
        match self.todos.update(id, changes).await? {
            UpdateOutcome::Updated(todo) => {
                if let Some(owner) = changes.claim_for {
                    debug!(todo_id = %id, user_id = %owner, "Owner claim applied");
                }
                Ok(todo)
            }
            UpdateOutcome::NotFound => Err(todo_not_found()),
            UpdateOutcome::Rejected => Err(not_owner()),
        }
    }
}
