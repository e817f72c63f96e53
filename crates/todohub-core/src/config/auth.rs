//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Secret used when none is configured.
///
/// This is a known weak default intended for local development only. The
/// server logs a warning at startup whenever it is in effect.
pub const DEFAULT_JWT_SECRET: &str = "dev-secret-change-me";

/// Token signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for HS256 token signing.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime as a duration string such as `24h` or `1h30m`.
    ///
    /// Malformed values fall back to 24 hours.
    #[serde(default = "default_expires_in")]
    pub jwt_expires_in: String,
    /// Issuer claim written into and required from every token.
    #[serde(default = "default_issuer")]
    pub jwt_issuer: String,
}

impl AuthConfig {
    /// Whether the insecure built-in secret is in use.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_expires_in: default_expires_in(),
            jwt_issuer: default_issuer(),
        }
    }
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_expires_in() -> String {
    "24h".to_string()
}

fn default_issuer() -> String {
    "todohub".to_string()
}
