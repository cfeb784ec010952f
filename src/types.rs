//! Common types used throughout postboard
//!
//! Shared type definitions, type aliases, and utility types used
//! across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Display State
// ============================================================================

/// What the rendering surface should show for the list view.
///
/// Exactly one of these is active per render cycle. `NoResults` is a
/// distinct state, not an error: the view loaded fine but the filtered
/// view is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    /// A fetch is in flight; nothing to show yet
    #[default]
    Loading,
    /// Posts are available and a page can be rendered
    Ready,
    /// The filtered view is empty
    NoResults,
    /// The corpus fetch failed; blocking error, no partial render
    Failed {
        /// Human-readable message for the error surface
        message: String,
    },
}

impl DisplayState {
    /// Create a failed state
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Check if the view can render items
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for HTTP retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_state_default() {
        assert_eq!(DisplayState::default(), DisplayState::Loading);
        assert!(!DisplayState::Loading.is_ready());
        assert!(DisplayState::Ready.is_ready());
    }

    #[test]
    fn test_display_state_failed() {
        let state = DisplayState::failed("boom");
        assert_eq!(
            state,
            DisplayState::Failed {
                message: "boom".to_string()
            }
        );
        assert!(!state.is_ready());
    }

    #[test]
    fn test_display_state_serde() {
        let json = serde_json::to_string(&DisplayState::NoResults).unwrap();
        assert_eq!(json, "\"no_results\"");
    }
}
