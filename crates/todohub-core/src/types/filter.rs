//! Query filter types for listing todos.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// Completion status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Only todos that are not completed.
    Active,
    /// Only completed todos.
    Completed,
}

impl StatusFilter {
    /// The `completed` value this filter selects.
    pub fn completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Parse a query-string value. Unknown values mean "no filter".
    pub fn from_query(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl FromStr for StatusFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(()),
        }
    }
}

/// Which owners' todos a listing may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Every todo regardless of owner (anonymous listing).
    #[default]
    Everyone,
    /// Todos owned by this user plus todos with no owner.
    OwnerOrUnowned(UserId),
}

/// Filter applied when listing todos from a store.
///
/// Results are always ordered by creation time, newest first.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    /// Case-insensitive regular expression matched against the body.
    pub search: Option<String>,
    /// Completion status.
    pub status: Option<StatusFilter>,
    /// Exact priority match.
    pub priority: Option<String>,
    /// Owner scoping.
    pub visibility: Visibility,
}
