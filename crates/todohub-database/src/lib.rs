//! # todohub-database
//!
//! Persistence for TodoHub. Defines the [`UserStore`] and [`TodoStore`]
//! traits and provides two implementations:
//!
//! - **postgres**: [`sqlx`] repositories over a [`DatabasePool`], with
//!   embedded migrations
//! - **memory**: process-local stores on [`dashmap`], used by tests and
//!   throwaway local runs
//!
//! [`StoreManager`] picks one at startup from `database.provider`.

pub mod connection;
pub mod manager;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use manager::StoreManager;
pub use store::{DeleteOutcome, TodoStore, UpdateOutcome, UserStore};
