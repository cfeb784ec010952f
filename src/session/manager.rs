//! Session manager implementation

use super::store::SessionSlot;
use super::types::SavedSearch;
use std::time::Duration;
use tracing::debug;

/// Saves and restores the search position through a session slot
///
/// The manager never sees page counts; restored pages go through the
/// paginator's clamping before use.
#[derive(Debug)]
pub struct SessionManager<S: SessionSlot> {
    slot: S,
}

impl<S: SessionSlot> SessionManager<S> {
    /// Create a manager over the given slot
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Access the underlying slot
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Save the current search position, stamped with the wall clock
    ///
    /// Overwrites any previous entry. Storage errors are swallowed; a
    /// failed save is indistinguishable from one that expires instantly.
    pub fn save(&self, term: &str, page: usize) {
        self.save_at(term, page, chrono::Utc::now().timestamp_millis());
    }

    /// Save stamped at an explicit instant
    pub fn save_at(&self, term: &str, page: usize, now_ms: i64) {
        let saved = SavedSearch::new(term, page, now_ms);
        let json = match serde_json::to_string(&saved) {
            Ok(json) => json,
            Err(e) => {
                debug!("Discarding session save, serialization failed: {e}");
                return;
            }
        };

        if let Err(e) = self.slot.write(&json) {
            debug!("Discarding session save, slot write failed: {e}");
        }
    }

    /// Restore the saved position if one exists and is still fresh
    ///
    /// Absent, malformed, or expired entries yield `None` with no visible
    /// side effect. A valid entry is returned and retained, so another
    /// restore within the window sees the same state.
    pub fn restore(&self, max_age: Duration) -> Option<SavedSearch> {
        self.restore_at(max_age, chrono::Utc::now().timestamp_millis())
    }

    /// Restore measured against an explicit instant
    pub fn restore_at(&self, max_age: Duration, now_ms: i64) -> Option<SavedSearch> {
        let raw = self.slot.read()?;

        let saved: SavedSearch = match serde_json::from_str(&raw) {
            Ok(saved) => saved,
            Err(e) => {
                debug!("Discarding malformed session entry: {e}");
                return None;
            }
        };

        if saved.age_ms(now_ms) >= max_age.as_millis() as i64 {
            debug!("Discarding expired session entry");
            return None;
        }

        Some(saved)
    }

    /// Drop any saved position
    pub fn clear(&self) {
        self.slot.clear();
    }
}
