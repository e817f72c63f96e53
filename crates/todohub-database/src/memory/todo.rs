//! In-memory todo store.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use regex::{Regex, RegexBuilder};

use todohub_core::error::AppError;
use todohub_core::result::AppResult;
use todohub_core::types::{TodoFilter, TodoId, UserId, Visibility};
use todohub_entity::todo::{NewTodo, Todo, TodoChanges};

use crate::store::{DeleteOutcome, TodoStore, UpdateOutcome};

#[derive(Debug, Clone)]
struct Slot {
    /// Insertion order, breaks ties between equal creation times.
    seq: u64,
    todo: Todo,
}

/// [`TodoStore`] held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryTodoStore {
    todos: Arc<DashMap<TodoId, Slot>>,
    next_seq: Arc<AtomicU64>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(todo: &Todo, filter: &TodoFilter, search: Option<&Regex>) -> bool {
    if let Some(re) = search {
        if !re.is_match(&todo.body) {
            return false;
        }
    }
    if let Some(status) = filter.status {
        if todo.completed != status.completed() {
            return false;
        }
    }
    if let Some(priority) = &filter.priority {
        if todo.priority.as_ref() != Some(priority) {
            return false;
        }
    }
    match filter.visibility {
        Visibility::Everyone => true,
        Visibility::OwnerOrUnowned(user) => todo.is_accessible_by(Some(user)),
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list(&self, filter: &TodoFilter) -> AppResult<Vec<Todo>> {
        let search = filter
            .search
            .as_deref()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|_| AppError::validation("Invalid search pattern"))
            })
            .transpose()?;

        let mut slots: Vec<Slot> = self
            .todos
            .iter()
            .filter(|entry| matches(&entry.todo, filter, search.as_ref()))
            .map(|entry| entry.value().clone())
            .collect();

        slots.sort_by(|a, b| {
            b.todo
                .created_at
                .cmp(&a.todo.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        Ok(slots.into_iter().map(|slot| slot.todo).collect())
    }

    async fn insert(&self, data: NewTodo) -> AppResult<Todo> {
        let todo = data.into_todo(TodoId::new(), Utc::now());
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.todos.insert(
            todo.id,
            Slot {
                seq,
                todo: todo.clone(),
            },
        );
        Ok(todo)
    }

    async fn find_by_id(&self, id: TodoId) -> AppResult<Option<Todo>> {
        Ok(self.todos.get(&id).map(|slot| slot.todo.clone()))
    }

    async fn update(&self, id: TodoId, changes: &TodoChanges) -> AppResult<UpdateOutcome> {
        // The shard write lock makes the guard check and the write atomic.
        let Some(mut slot) = self.todos.get_mut(&id) else {
            return Ok(UpdateOutcome::NotFound);
        };
        if !changes.permits(&slot.todo) {
            return Ok(UpdateOutcome::Rejected);
        }
        changes.apply(&mut slot.todo);
        Ok(UpdateOutcome::Updated(slot.todo.clone()))
    }

    async fn delete(&self, id: TodoId, requester: Option<UserId>) -> AppResult<DeleteOutcome> {
        if self
            .todos
            .remove_if(&id, |_, slot| slot.todo.is_accessible_by(requester))
            .is_some()
        {
            return Ok(DeleteOutcome::Deleted);
        }
        if self.todos.contains_key(&id) {
            Ok(DeleteOutcome::Rejected)
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }
}
