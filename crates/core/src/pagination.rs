//! List-limit defaults and clamping.
//!
//! Listing has no cursor or offset; callers only bound the number of
//! documents returned.

/// Number of stories returned by a list call when no limit is supplied.
pub const DEFAULT_LIST_LIMIT: i64 = 20;

/// Upper bound applied to any caller-supplied limit.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}
