//! # postboard
//!
//! Blog viewer core: browse a remote paginated post collection with
//! search, a windowed pagination control, and session restore of the
//! reader's position.
//!
//! ## Features
//!
//! - **Corpus Fetch**: pulls the full post collection, sized by the
//!   server's authoritative total
//! - **Search**: remote search with a local title-match fallback and
//!   debounced input
//! - **Pagination**: pure page slicing plus an ellipsis-windowed page
//!   control
//! - **Session Restore**: the search term and page survive a round trip
//!   to the detail view, within a 5-minute window
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use postboard::api::BlogApi;
//! use postboard::session::{MemorySlot, SessionManager};
//! use postboard::view::BlogView;
//!
//! #[tokio::main]
//! async fn main() -> postboard::Result<()> {
//!     let api = BlogApi::new("https://dummyjson.com");
//!     let session = SessionManager::new(MemorySlot::new());
//!
//!     let mut view = BlogView::new(api, session);
//!     view.load().await?;
//!     view.search("history").await;
//!
//!     let model = view.render();
//!     for post in &model.items {
//!         println!("{}", post.title);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       View Controller                       │
//! │  load()    search(term)    go_to_page(n)    open_post(id)   │
//! │                render() → RenderModel                       │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────┬───────────┬─────┴─────────┬─────────────────────┐
//! │    API    │  Filter   │   Paginate    │      Session        │
//! ├───────────┼───────────┼───────────────┼─────────────────────┤
//! │ Corpus    │ Remote    │ Page slice    │ Save position       │
//! │ Search    │ Fallback  │ Clamping      │ Restore ≤ 5 min     │
//! │ Detail    │ Debounce  │ Page window   │ Discard stale       │
//! └───────────┴───────────┴───────────────┴─────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cast_possible_truncation)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client with retry support
pub mod http;

/// Remote content API
pub mod api;

/// Client-side pagination
pub mod paginate;

/// Search filtering and debouncing
pub mod filter;

/// Session state management
pub mod session;

/// View controller and render models
pub mod view;

/// Viewer configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::DisplayState;

pub use api::{BlogApi, Post};
pub use config::ViewConfig;
pub use paginate::{paginate, window, PageControl};
pub use view::{BlogView, RenderModel};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
