//! Search filtering
//!
//! Derives the filtered view from a search term. A non-empty term goes to
//! the remote search endpoint; when that fails the filter degrades to a
//! local case-insensitive substring match on titles, so search never
//! produces a blocking error. An empty or whitespace-only term clears the
//! filter and returns the corpus untouched, with no remote call.
//!
//! Callers are expected to debounce keystrokes through [`Debouncer`]
//! rather than dispatching a remote search per input event.

mod debounce;

pub use debounce::{DebounceOutcome, Debouncer, DEFAULT_QUIET_WINDOW};

use crate::api::Post;
use crate::error::Result;
use async_trait::async_trait;
use tracing::warn;

/// Remote search seam
///
/// Implemented by the content API client; tests substitute stubs.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Search the collection server-side; result order is authoritative
    async fn search(&self, term: &str) -> Result<Vec<Post>>;
}

/// Derive the filtered view for a search term
///
/// - Empty/whitespace term: the corpus is returned unchanged.
/// - Otherwise the remote result is taken verbatim on success.
/// - On remote failure the local fallback matches the term against each
///   post's title, case-insensitively. The fallback cannot fail; it may
///   return an empty view.
///
/// Changing the term invalidates any previous page cursor; the caller
/// resets pagination to page 1.
pub async fn apply_filter(
    term: &str,
    remote: &dyn SearchBackend,
    corpus: &[Post],
) -> Vec<Post> {
    let term = term.trim();
    if term.is_empty() {
        return corpus.to_vec();
    }

    match remote.search(term).await {
        Ok(posts) => posts,
        Err(e) => {
            warn!("Remote search failed ({e}), falling back to local title match");
            local_title_match(term, corpus)
        }
    }
}

/// Case-insensitive substring match of `term` against post titles
pub fn local_title_match(term: &str, corpus: &[Post]) -> Vec<Post> {
    let needle = term.to_lowercase();
    corpus
        .iter()
        .filter(|post| post.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests;
