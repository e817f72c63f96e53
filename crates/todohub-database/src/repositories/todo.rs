//! Todo repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use todohub_core::error::{AppError, ErrorKind};
use todohub_core::result::AppResult;
use todohub_core::types::{TodoFilter, TodoId, UserId, Visibility};
use todohub_entity::todo::{NewTodo, Todo, TodoChanges};

use crate::store::{DeleteOutcome, TodoStore, UpdateOutcome};

/// PostgreSQL-backed [`TodoStore`].
#[derive(Debug, Clone)]
pub struct TodoRepository {
    pool: PgPool,
}

impl TodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// SQLSTATE `invalid_regular_expression`.
const INVALID_REGULAR_EXPRESSION: &str = "2201B";

/// The service checks search patterns against the `regex` crate, but
/// PostgreSQL's ARE dialect rejects some of them (`\p{L}`, named groups).
fn list_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.code().as_deref() == Some(INVALID_REGULAR_EXPRESSION) =>
        {
            AppError::validation("Invalid search pattern")
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to list todos", e),
    }
}

/// Build the listing query. Search uses PostgreSQL's case-insensitive
/// regex operator.
fn list_query(filter: &TodoFilter) -> QueryBuilder<'_, Postgres> {
    let mut qb = QueryBuilder::new("SELECT * FROM todos WHERE TRUE");

    if let Some(search) = &filter.search {
        qb.push(" AND body ~* ").push_bind(search.as_str());
    }
    if let Some(status) = filter.status {
        qb.push(" AND completed = ").push_bind(status.completed());
    }
    if let Some(priority) = &filter.priority {
        qb.push(" AND priority = ").push_bind(priority.as_str());
    }
    if let Visibility::OwnerOrUnowned(user) = filter.visibility {
        qb.push(" AND (owner_id IS NULL OR owner_id = ")
            .push_bind(user)
            .push(")");
    }

    qb.push(" ORDER BY created_at DESC");
    qb
}

#[async_trait]
impl TodoStore for TodoRepository {
    async fn list(&self, filter: &TodoFilter) -> AppResult<Vec<Todo>> {
        let mut query = list_query(filter);
        query
            .build_query_as::<Todo>()
            .fetch_all(&self.pool)
            .await
            .map_err(list_error)
    }

    async fn insert(&self, data: NewTodo) -> AppResult<Todo> {
        let todo = data.into_todo(TodoId::new(), chrono::Utc::now());
        sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (id, body, completed, starred, priority, due_date, \
                                created_at, updated_at, completed_at, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(todo.id)
        .bind(&todo.body)
        .bind(todo.completed)
        .bind(todo.starred)
        .bind(&todo.priority)
        .bind(todo.due_date)
        .bind(todo.created_at)
        .bind(todo.updated_at)
        .bind(todo.completed_at)
        .bind(todo.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create todo", e))
    }

    async fn find_by_id(&self, id: TodoId) -> AppResult<Option<Todo>> {
        sqlx::query_as::<_, Todo>("SELECT * FROM todos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find todo by id", e))
    }

    async fn update(&self, id: TodoId, changes: &TodoChanges) -> AppResult<UpdateOutcome> {
        let completion = changes.completion;
        let updated = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET body = COALESCE($2, body), \
                              priority = CASE WHEN $3 THEN $4 ELSE priority END, \
                              due_date = CASE WHEN $5 THEN $6 ELSE due_date END, \
                              completed = COALESCE($7, completed), \
                              completed_at = CASE WHEN $7 IS NULL THEN completed_at ELSE $8 END, \
                              starred = COALESCE($9, starred), \
                              owner_id = COALESCE(owner_id, $10), \
                              updated_at = $11 \
             WHERE id = $1 AND ($10::uuid IS NULL OR owner_id IS NULL OR owner_id = $10) \
             RETURNING *",
        )
        .bind(id)
        .bind(&changes.body)
        .bind(changes.priority.is_some())
        .bind(changes.priority.clone().flatten())
        .bind(changes.due_date.is_some())
        .bind(changes.due_date.flatten())
        .bind(completion.map(|c| c.completed()))
        .bind(completion.and_then(|c| c.completed_at()))
        .bind(changes.starred)
        .bind(changes.claim_for)
        .bind(changes.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update todo", e))?;

        if let Some(todo) = updated {
            return Ok(UpdateOutcome::Updated(todo));
        }

        // Nothing matched: either the row is gone or the claim guard failed.
        match self.find_by_id(id).await? {
            Some(_) => Ok(UpdateOutcome::Rejected),
            None => Ok(UpdateOutcome::NotFound),
        }
    }

    async fn delete(&self, id: TodoId, requester: Option<UserId>) -> AppResult<DeleteOutcome> {
        // `owner_id = NULL` never matches, so anonymous callers only reach
        // unowned rows.
        let result = sqlx::query(
            "DELETE FROM todos WHERE id = $1 AND (owner_id IS NULL OR owner_id = $2)",
        )
        .bind(id)
        .bind(requester)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete todo", e))?;

        if result.rows_affected() > 0 {
            return Ok(DeleteOutcome::Deleted);
        }
        match self.find_by_id(id).await? {
            Some(_) => Ok(DeleteOutcome::Rejected),
            None => Ok(DeleteOutcome::NotFound),
        }
    }
}
