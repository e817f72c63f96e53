//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use todohub_auth::jwt::{JwtDecoder, JwtEncoder};
use todohub_auth::password::PasswordHasher;
use todohub_core::config::AppConfig;
use todohub_database::StoreManager;
use todohub_service::todo::TodoService;
use todohub_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// User and todo stores (PostgreSQL or in-memory)
    pub stores: StoreManager,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Registration, login and profiles
    pub user_service: Arc<UserService>,
    /// Todo ownership and mutation rules
    pub todo_service: Arc<TodoService>,
}

impl AppState {
    /// Wire services on top of the given stores.
    pub fn new(config: AppConfig, stores: StoreManager) -> Self {
        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let user_service = Arc::new(UserService::new(
            stores.users(),
            password_hasher,
            jwt_encoder,
        ));
        let todo_service = Arc::new(TodoService::new(stores.todos()));

        Self {
            config: Arc::new(config),
            stores,
            jwt_decoder,
            user_service,
            todo_service,
        }
    }
}
