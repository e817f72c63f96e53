//! In-memory user store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use todohub_core::error::AppError;
use todohub_core::result::AppResult;
use todohub_core::types::UserId;
use todohub_entity::user::{NewUser, User, UserChanges};

use crate::store::UserStore;

/// [`UserStore`] held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<DashMap<UserId, User>>,
    /// Lower-cased email to owning user; doubles as the unique index.
    emails: Arc<DashMap<String, UserId>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, data: NewUser) -> AppResult<User> {
        let email = data.email.to_lowercase();
        match self.emails.entry(email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("Email already registered")),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let user = User {
                    id: UserId::new(),
                    name: data.name,
                    username: data.username,
                    email,
                    password_hash: data.password_hash,
                    created_at: now,
                    updated_at: now,
                };
                slot.insert(user.id);
                self.users.insert(user.id, user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let Some(id) = self.emails.get(&email.to_lowercase()).map(|e| *e) else {
            return Ok(None);
        };
        self.find_by_id(id).await
    }

    async fn update_profile(&self, id: UserId, changes: UserChanges) -> AppResult<Option<User>> {
        let Some(mut user) = self.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(username) = changes.username {
            user.username = username;
        }
        user.updated_at = Utc::now();
        Ok(Some(user.clone()))
    }
}
