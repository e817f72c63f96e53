//! Token lifetime parsing.
//!
//! Lifetimes use the `humantime` format: `24h`, `90m`, `1h 30m`, `2days`.

use chrono::Duration;
use tracing::warn;

/// Lifetime in hours used when the configured value is unusable.
pub const DEFAULT_TTL_HOURS: i64 = 24;

/// Parse a duration string. Returns `None` for malformed input or values
/// too large to represent.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let std = humantime::parse_duration(input.trim()).ok()?;
    Duration::from_std(std).ok()
}

/// Resolve the configured lifetime, falling back to 24 hours for
/// malformed or non-positive values.
pub fn resolve_ttl(configured: &str) -> Duration {
    match parse_duration(configured) {
        Some(ttl) if ttl > Duration::zero() => ttl,
        _ => {
            warn!(
                value = configured,
                "Invalid jwt_expires_in, using default of 24h"
            );
            Duration::hours(DEFAULT_TTL_HOURS)
        }
    }
}
