//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use todohub_core::config::DatabaseConfig;
use todohub_core::error::AppError;
use todohub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::{MemoryTodoStore, MemoryUserStore};
use crate::migration::run_migrations;
use crate::repositories::{TodoRepository, UserRepository};
use crate::store::{TodoStore, UserStore};

/// Owns the user and todo stores selected by `database.provider`.
#[derive(Debug, Clone)]
pub struct StoreManager {
    users: Arc<dyn UserStore>,
    todos: Arc<dyn TodoStore>,
    /// Present only for the PostgreSQL provider.
    pool: Option<DatabasePool>,
}

impl StoreManager {
    /// Build the stores from configuration, connecting and migrating when
    /// the provider is `postgres`.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL store provider");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self {
                    users: Arc::new(UserRepository::new(pool.pool().clone())),
                    todos: Arc::new(TodoRepository::new(pool.pool().clone())),
                    pool: Some(pool),
                })
            }
            "memory" => {
                info!("Initializing in-memory store provider");
                Ok(Self::memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            todos: Arc::new(MemoryTodoStore::new()),
            pool: None,
        }
    }

    pub fn users(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.users)
    }

    pub fn todos(&self) -> Arc<dyn TodoStore> {
        Arc::clone(&self.todos)
    }

    /// Check the backing database. In-memory stores are always healthy.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
