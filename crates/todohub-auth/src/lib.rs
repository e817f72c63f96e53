//! # todohub-auth
//!
//! Authentication primitives for TodoHub.
//!
//! ## Modules
//!
//! - `jwt`: HS256 bearer token issuance and verification
//! - `password`: Argon2 password hashing and registration input rules

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, RegistrationValidator};
