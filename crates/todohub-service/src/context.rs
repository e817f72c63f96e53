//! Request context carrying the authenticated user.

use serde::{Deserialize, Serialize};

use todohub_core::types::UserId;

/// Identity of the caller, established from a verified bearer token.
///
/// Anonymous callers have no context; services take
/// `Option<&RequestContext>` where anonymous access is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
}

impl RequestContext {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
