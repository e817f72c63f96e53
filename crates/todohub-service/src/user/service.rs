//! Account operations: registration, login, and profile management.

use std::sync::Arc;

use tracing::info;

use todohub_auth::jwt::JwtEncoder;
use todohub_auth::password::{PasswordHasher, RegistrationValidator};
use todohub_core::error::AppError;
use todohub_database::UserStore;
use todohub_entity::user::{NewUser, User, UserChanges};

use crate::context::RequestContext;

/// Input for creating an account.
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    /// Falls back to the trimmed name when blank.
    pub username: Option<String>,
    pub email: String,
    pub password: String,
}

/// Profile fields a user may change. Blank values are ignored.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub username: Option<String>,
}

/// A freshly issued token together with the account it identifies.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Handles account registration, login and self-service profile changes.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: RegistrationValidator,
    encoder: Arc<JwtEncoder>,
}

/// Trim and drop blank values.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator: RegistrationValidator::new(),
            encoder,
        }
    }

    /// Creates an account and signs the new user in.
    pub async fn register(&self, input: Registration) -> Result<AuthSession, AppError> {
        self.validator
            .validate(&input.name, &input.email, &input.password)?;

        let email = input.email.to_lowercase();
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let name = input.name.trim().to_string();
        let username = non_blank(input.username).unwrap_or_else(|| name.clone());
        let password_hash = self.hasher.hash_password(&input.password)?;

        // A concurrent registration can still slip past the check above;
        // the store reports that as a conflict too.
        let user = self
            .users
            .insert(NewUser {
                name,
                username,
                email,
                password_hash,
            })
            .await?;

        let token = self.encoder.issue(user.id)?;
        info!(user_id = %user.id, "User registered");

        Ok(AuthSession { token, user })
    }

    /// Verifies credentials and issues a token.
    ///
    /// Unknown email and wrong password fail identically, and both pay for
    /// an Argon2 verification.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let Some(user) = self.users.find_by_email(&email.to_lowercase()).await? else {
            self.hasher.verify_dummy(password);
            return Err(AppError::invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            info!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::invalid_credentials());
        }

        let token = self.encoder.issue(user.id)?;
        info!(user_id = %user.id, "User logged in");

        Ok(AuthSession { token, user })
    }

    /// Gets the current user's profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates name and/or username. At least one must be non-blank.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        update: ProfileUpdate,
    ) -> Result<User, AppError> {
        let changes = UserChanges {
            name: non_blank(update.name),
            username: non_blank(update.username),
        };
        if changes.is_empty() {
            return Err(AppError::no_changes("No changes"));
        }

        let user = self
            .users
            .update_profile(ctx.user_id, changes)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = %ctx.user_id, "Profile updated");
        Ok(user)
    }
}
