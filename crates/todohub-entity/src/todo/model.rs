//! Todo entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todohub_core::types::{TodoId, UserId};

/// A single todo item.
///
/// `completed_at` is set exactly when `completed` is true. `owner_id` is
/// `None` for unclaimed items and, once set, never changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: TodoId,
    pub body: String,
    pub completed: bool,
    pub starred: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
}

impl Todo {
    /// Whether `user` may act on this todo as its owner.
    ///
    /// Unowned todos are open to everyone.
    pub fn is_accessible_by(&self, user: Option<UserId>) -> bool {
        match self.owner_id {
            None => true,
            Some(owner) => user == Some(owner),
        }
    }
}

/// Data required to create a new todo.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub body: String,
    pub priority: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub starred: bool,
    pub owner_id: Option<UserId>,
}

impl NewTodo {
    /// Materialise the row a store inserts.
    pub fn into_todo(self, id: TodoId, now: DateTime<Utc>) -> Todo {
        Todo {
            id,
            body: self.body,
            completed: false,
            starred: self.starred,
            priority: self.priority,
            due_date: self.due_date,
            created_at: now,
            updated_at: now,
            completed_at: None,
            owner_id: self.owner_id,
        }
    }
}
