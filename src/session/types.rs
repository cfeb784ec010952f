//! Session state payload
//!
//! Serialized to JSON into the session slot and parsed back on restore.

use serde::{Deserialize, Serialize};

/// A saved search position
///
/// The page is stored as the user left it; it must be re-clamped through
/// the paginator before use, since the total page count may have changed
/// by the time it is restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearch {
    /// The search term active at save time (may be empty)
    pub term: String,
    /// The page the user was on
    pub page: usize,
    /// Wall-clock save time, epoch milliseconds
    pub saved_at_ms: i64,
}

impl SavedSearch {
    /// Create a saved search stamped at the given instant
    pub fn new(term: impl Into<String>, page: usize, saved_at_ms: i64) -> Self {
        Self {
            term: term.into(),
            page,
            saved_at_ms,
        }
    }

    /// Age of this entry at `now_ms`, clamped at zero for clock skew
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        (now_ms - self.saved_at_ms).max(0)
    }
}
