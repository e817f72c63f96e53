//! Partial updates applied to a stored todo.

use chrono::{DateTime, Utc};
use todohub_core::types::UserId;

use super::model::Todo;

/// New completion state, carrying the timestamp bookkeeping with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionChange {
    /// Mark completed at the given instant.
    Complete(DateTime<Utc>),
    /// Mark not completed and clear `completed_at`.
    Reopen,
}

impl CompletionChange {
    /// Build from the requested flag.
    pub fn from_flag(completed: bool, now: DateTime<Utc>) -> Self {
        if completed {
            Self::Complete(now)
        } else {
            Self::Reopen
        }
    }

    pub fn completed(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Complete(at) => Some(*at),
            Self::Reopen => None,
        }
    }
}

/// Fields to overwrite on a todo. `None` leaves a field untouched.
///
/// `priority` and `due_date` are doubly optional: `Some(None)` clears them.
/// `claim_for` makes the write conditional on the todo being unowned or
/// already owned by that user; a todo that is unowned becomes theirs.
#[derive(Debug, Clone)]
pub struct TodoChanges {
    pub body: Option<String>,
    pub priority: Option<Option<String>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub completion: Option<CompletionChange>,
    pub starred: Option<bool>,
    pub claim_for: Option<UserId>,
    pub updated_at: DateTime<Utc>,
}

impl TodoChanges {
    /// An empty change set stamped with `now`.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            body: None,
            priority: None,
            due_date: None,
            completion: None,
            starred: None,
            claim_for: None,
            updated_at: now,
        }
    }

    /// Whether the conditional ownership guard lets this write through.
    pub fn permits(&self, todo: &Todo) -> bool {
        match self.claim_for {
            None => true,
            Some(user) => todo.is_accessible_by(Some(user)),
        }
    }

    /// Apply the change set in place. Callers check [`Self::permits`] first.
    pub fn apply(&self, todo: &mut Todo) {
        if let Some(body) = &self.body {
            todo.body = body.clone();
        }
        if let Some(priority) = &self.priority {
            todo.priority = priority.clone();
        }
        if let Some(due_date) = self.due_date {
            todo.due_date = due_date;
        }
        if let Some(completion) = self.completion {
            todo.completed = completion.completed();
            todo.completed_at = completion.completed_at();
        }
        if let Some(starred) = self.starred {
            todo.starred = starred;
        }
        if let Some(user) = self.claim_for {
            todo.owner_id.get_or_insert(user);
        }
        todo.updated_at = self.updated_at;
    }
}
