//! Cancellable quiet-window debouncing
//!
//! Coalesces rapid input events into one dispatch: each call to
//! [`Debouncer::settle`] opens a new quiet window and supersedes any
//! window still pending, so only the last term entered within a quiet
//! period is ever sent to the search backend.
//!
//! Supersession is tracked with an epoch counter rather than timer
//! identity: a settle call that finds the epoch moved on while it slept
//! reports [`DebounceOutcome::Superseded`] and the caller drops its term.
//!
//! Two searches dispatched in *separate* quiet windows can still resolve
//! out of request order; the view applies whichever response lands last.
//! That race is documented behavior, not guarded against.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default quiet window between keystrokes and dispatch
pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(300);

/// How a quiet window ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceOutcome {
    /// The window elapsed undisturbed; dispatch the pending input
    Settled,
    /// A newer input opened its own window; drop this one
    Superseded,
}

impl DebounceOutcome {
    /// Check if the pending input should be dispatched
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Settled)
    }
}

/// Explicit cancellable-timer debouncer
///
/// Clones share the same epoch, so any clone can supersede a window
/// opened by another.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    epoch: Arc<AtomicU64>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet window
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// The configured quiet window
    pub fn quiet_window(&self) -> Duration {
        self.quiet
    }

    /// Open a new quiet window, superseding any pending one
    ///
    /// Resolves once the window elapses, reporting whether this window is
    /// still the latest.
    pub async fn settle(&self) -> DebounceOutcome {
        let mine = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.quiet).await;

        if self.epoch.load(Ordering::SeqCst) == mine {
            DebounceOutcome::Settled
        } else {
            DebounceOutcome::Superseded
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_WINDOW)
    }
}
