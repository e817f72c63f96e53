//! Request DTOs.
//!
//! Missing string fields deserialize as empty so the services report the
//! matching validation message instead of a generic parse failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use todohub_service::todo::{NewTodoInput, TodoQuery, TodoUpdate};
use todohub_service::user::{ProfileUpdate, Registration};

/// Distinguishes an absent field from an explicit `null`.
fn deserialize_some<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// POST /api/auth/register
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name,
            username: req.username,
            email: req.email,
            password: req.password,
        }
    }
}

/// POST /api/auth/login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// PATCH /api/auth/me
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub username: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            username: req.username,
        }
    }
}

/// GET /api/todos query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTodosQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl From<ListTodosQuery> for TodoQuery {
    fn from(q: ListTodosQuery) -> Self {
        Self {
            search: q.search,
            status: q.status,
            priority: q.priority,
        }
    }
}

/// POST /api/todos
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub body: String,
    pub priority: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub starred: Option<bool>,
}

impl From<CreateTodoRequest> for NewTodoInput {
    fn from(req: CreateTodoRequest) -> Self {
        Self {
            body: req.body,
            priority: req.priority,
            due_date: req.due_date,
            starred: req.starred,
        }
    }
}

/// PATCH /api/todos/{id}
///
/// `dueDate: null` clears the date; omitting it leaves the date alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub body: Option<String>,
    pub completed: Option<bool>,
    pub starred: Option<bool>,
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl From<UpdateTodoRequest> for TodoUpdate {
    fn from(req: UpdateTodoRequest) -> Self {
        Self {
            body: req.body,
            priority: req.priority,
            due_date: req.due_date,
            completed: req.completed,
            starred: req.starred,
        }
    }
}

/// PATCH /api/todos/{id}/star. An empty body stars the todo.
#[derive(Debug, Clone, Deserialize)]
pub struct StarRequest {
    #[serde(default = "default_starred")]
    pub starred: bool,
}

fn default_starred() -> bool {
    true
}

impl Default for StarRequest {
    fn default() -> Self {
        Self { starred: true }
    }
}
