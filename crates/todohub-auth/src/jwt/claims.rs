//! JWT claims structure carried by every bearer token.

use serde::{Deserialize, Serialize};

use todohub_core::types::UserId;

/// JWT claims payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user ID.
    pub sub: UserId,
    /// Same value as `sub`, kept for clients that read `userId`.
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// Issuer.
    pub iss: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
