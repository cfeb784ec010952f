//! Session state management
//!
//! Persists the user's search term and page position across navigation to
//! the detail view and back. The state lives in a single named slot,
//! overwritten on every save, and is only honored within a bounded
//! validity window measured against wall-clock time at restore.
//!
//! Saving never fails observably; restoring an absent, malformed, or
//! expired entry silently yields nothing. A successful restore retains
//! the entry, so returning repeatedly within the window keeps restoring
//! the same position.

mod manager;
mod store;
mod types;

pub use manager::SessionManager;
pub use store::{FileSlot, MemorySlot, SessionSlot};
pub use types::SavedSearch;

use std::time::Duration;

/// Fixed name of the persistence slot
pub const SLOT_NAME: &str = "blog_search_state";

/// How long a saved search position stays valid
pub const STATE_VALIDITY: Duration = Duration::from_millis(300_000);

#[cfg(test)]
mod tests;
