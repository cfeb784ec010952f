//! View controller
//!
//! Sequences the other components in response to lifecycle and input
//! events; owns all mutable view state (corpus, filtered view, term,
//! page) as explicit fields. It holds no pagination logic of its own;
//! slicing and control layout stay in [`crate::paginate`].
//!
//! # Event flow
//!
//! - `load` - fetch the corpus, then attempt a session restore
//! - `search` - derive a new filtered view, reset to page 1
//! - `go_to_page` / `next_page` / `prev_page` - move the clamped cursor
//! - `open_post` - save the position, then fetch the detail view
//! - `render` - project the state into a [`RenderModel`]

mod types;

pub use types::{post_id_from_link, post_link, PostDetail, RenderModel};

use crate::api::BlogApi;
use crate::api::Post;
use crate::error::Result;
use crate::filter::{apply_filter, Debouncer};
use crate::paginate::{paginate, PageControl};
use crate::session::{SessionManager, SessionSlot, STATE_VALIDITY};
use crate::types::DisplayState;
use tracing::{debug, info};

/// Default number of posts per page
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Default number of directly visible page buttons
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// The blog list view
///
/// Methods take `&mut self`, so state mutation only happens in response
/// to one completed event at a time; there is no parallelism to guard
/// against, only interleaved callbacks.
pub struct BlogView<S: SessionSlot> {
    api: BlogApi,
    session: SessionManager<S>,
    debouncer: Debouncer,
    page_size: usize,
    max_visible: usize,

    corpus: Vec<Post>,
    filtered: Vec<Post>,
    term: String,
    current_page: usize,
    display: DisplayState,
}

impl<S: SessionSlot> BlogView<S> {
    /// Create a view over an API client and a session manager
    pub fn new(api: BlogApi, session: SessionManager<S>) -> Self {
        Self {
            api,
            session,
            debouncer: Debouncer::default(),
            page_size: DEFAULT_PAGE_SIZE,
            max_visible: DEFAULT_MAX_VISIBLE,
            corpus: Vec::new(),
            filtered: Vec::new(),
            term: String::new(),
            current_page: 1,
            display: DisplayState::Loading,
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the page-button window width
    #[must_use]
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    /// Set the input debouncer
    #[must_use]
    pub fn with_debouncer(mut self, debouncer: Debouncer) -> Self {
        self.debouncer = debouncer;
        self
    }

    /// The shared debouncer, for input drivers that spawn their own waits
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    /// The active search term
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The clamped current page
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Size of the unfiltered corpus
    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }

    /// The active display state
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Initial load: fetch the corpus, then attempt a session restore
    ///
    /// A corpus fetch failure is the one unrecoverable error here: the
    /// view enters the blocking `Failed` state and the error propagates.
    /// A valid saved search re-applies its filter and clamps its page;
    /// anything else leaves the view on page 1, unfiltered.
    pub async fn load(&mut self) -> Result<()> {
        self.display = DisplayState::Loading;

        match self.api.fetch_corpus().await {
            Ok(corpus) => {
                info!("Loaded corpus of {} posts", corpus.len());
                self.corpus = corpus;
                self.filtered = self.corpus.clone();
                self.term.clear();
                self.current_page = 1;
            }
            Err(e) => {
                self.display = DisplayState::failed(format!("Failed to load posts: {e}"));
                return Err(e);
            }
        }

        if let Some(saved) = self.session.restore(STATE_VALIDITY) {
            debug!(
                "Restoring saved search: term={:?} page={}",
                saved.term, saved.page
            );
            self.term = saved.term;
            self.filtered = apply_filter(&self.term, &self.api, &self.corpus).await;
            // The saved page may be stale against the current view size
            self.current_page = paginate(&self.filtered, self.page_size, saved.page).number;
        }

        self.refresh_display();
        Ok(())
    }

    /// Apply a new search term and reset to page 1
    ///
    /// Replacing the filtered view invalidates the old cursor, so the
    /// page always resets regardless of its prior value.
    pub async fn search(&mut self, term: &str) {
        self.term = term.trim().to_string();
        self.filtered = apply_filter(&self.term, &self.api, &self.corpus).await;
        self.current_page = 1;
        self.refresh_display();
    }

    /// Debounced search: waits out the quiet window first
    ///
    /// Returns `false` when a newer input superseded this one, in which
    /// case the view is untouched.
    pub async fn debounced_search(&mut self, term: &str) -> bool {
        if !self.debouncer.settle().await.is_settled() {
            return false;
        }
        self.search(term).await;
        true
    }

    /// Clear the search, restoring the unfiltered corpus
    pub async fn clear_search(&mut self) {
        self.search("").await;
    }

    /// Move to the requested page, clamped into range
    ///
    /// Returns the page actually landed on.
    pub fn go_to_page(&mut self, requested: usize) -> usize {
        self.current_page = paginate(&self.filtered, self.page_size, requested).number;
        self.current_page
    }

    /// Move one page forward
    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.current_page + 1)
    }

    /// Move one page back
    pub fn prev_page(&mut self) -> usize {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Navigate to a post's detail view
    ///
    /// Saves the current search position first, so returning to the list
    /// within the validity window restores it. The list state itself is
    /// left untouched. Post and comments are fetched concurrently.
    pub async fn open_post(&mut self, id: u64) -> Result<PostDetail> {
        self.session.save(&self.term, self.current_page);

        let (post, comments) = futures::future::try_join(
            self.api.fetch_post(id),
            self.api.fetch_comments(id),
        )
        .await?;

        Ok(PostDetail { post, comments })
    }

    /// Project the current state for the rendering surface
    pub fn render(&self) -> RenderModel {
        let page = paginate(&self.filtered, self.page_size, self.current_page);

        RenderModel {
            display: self.display.clone(),
            items: page.items.to_vec(),
            control: PageControl::build(page.total_pages, page.number, self.max_visible),
            term: self.term.clone(),
            current_page: page.number,
            total_pages: page.total_pages,
        }
    }

    fn refresh_display(&mut self) {
        self.display = if self.filtered.is_empty() {
            DisplayState::NoResults
        } else {
            DisplayState::Ready
        };
    }
}
