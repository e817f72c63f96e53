//! Password hashing and registration input rules.

pub mod hasher;
pub mod validator;

pub use hasher::PasswordHasher;
pub use validator::RegistrationValidator;
