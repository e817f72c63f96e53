//! Input rules for new accounts.

use std::sync::LazyLock;

use regex::Regex;

use todohub_core::error::AppError;

/// Minimum trimmed length of a display name.
pub const MIN_NAME_LENGTH: usize = 2;
/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[A-Za-z0-9_.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// Checks registration input, reporting the first rule that fails.
///
/// Rules run in a fixed order: name, then email, then password.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationValidator;

impl RegistrationValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, name: &str, email: &str, password: &str) -> Result<(), AppError> {
        self.validate_name(name)?;
        self.validate_email(email)?;
        self.validate_password(password)
    }

    pub fn validate_name(&self, name: &str) -> Result<(), AppError> {
        if name.trim().chars().count() < MIN_NAME_LENGTH {
            return Err(AppError::validation("Name must be at least 2 characters"));
        }
        Ok(())
    }

    pub fn validate_email(&self, email: &str) -> Result<(), AppError> {
        if !EMAIL.is_match(email) {
            return Err(AppError::validation("Invalid email"));
        }
        Ok(())
    }

    pub fn validate_password(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(
                "Password must be at least 6 characters",
            ));
        }
        Ok(())
    }
}
