//! Tests for the filter module

use super::*;
use crate::api::{Post, Reactions};
use crate::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn post(id: u64, title: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        body: format!("Body {id}"),
        user_id: 1,
        views: 0,
        reactions: Reactions::default(),
        tags: vec![],
    }
}

fn corpus() -> Vec<Post> {
    vec![
        post(1, "Learning Rust"),
        post(2, "A walk in the park"),
        post(3, "rustling leaves"),
    ]
}

/// Backend returning a fixed result, counting calls
struct FixedSearch {
    posts: Vec<Post>,
    calls: AtomicUsize,
}

impl FixedSearch {
    fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SearchBackend for FixedSearch {
    async fn search(&self, _term: &str) -> crate::error::Result<Vec<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.posts.clone())
    }
}

/// Backend that always fails
struct FailingSearch;

#[async_trait::async_trait]
impl SearchBackend for FailingSearch {
    async fn search(&self, _term: &str) -> crate::error::Result<Vec<Post>> {
        Err(Error::http_status(500, "search exploded"))
    }
}

// ============================================================================
// apply_filter
// ============================================================================

#[tokio::test]
async fn test_empty_term_returns_corpus_without_remote_call() {
    let backend = FixedSearch::new(vec![post(9, "Should not appear")]);
    let corpus = corpus();

    let filtered = apply_filter("", &backend, &corpus).await;
    assert_eq!(filtered, corpus);
    assert_eq!(backend.call_count(), 0);

    let filtered = apply_filter("   \t", &backend, &corpus).await;
    assert_eq!(filtered, corpus);
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_remote_result_taken_verbatim() {
    // Server relevance order wins, even when it disagrees with local order
    let backend = FixedSearch::new(vec![post(3, "rustling leaves"), post(1, "Learning Rust")]);
    let corpus = corpus();

    let filtered = apply_filter("rust", &backend, &corpus).await;

    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].id, 3);
    assert_eq!(filtered[1].id, 1);
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_term_is_trimmed_before_dispatch() {
    let backend = FixedSearch::new(vec![post(1, "Learning Rust")]);
    let filtered = apply_filter("  rust  ", &backend, &corpus()).await;

    assert_eq!(filtered.len(), 1);
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_remote_failure_falls_back_to_local_title_match() {
    let filtered = apply_filter("RUST", &FailingSearch, &corpus()).await;

    // Case-insensitive, title only: "Learning Rust" and "rustling leaves"
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].id, 1);
    assert_eq!(filtered[1].id, 3);
}

#[tokio::test]
async fn test_fallback_may_be_empty_but_never_fails() {
    let filtered = apply_filter("zeppelin", &FailingSearch, &corpus()).await;
    assert!(filtered.is_empty());
}

#[tokio::test]
async fn test_fallback_ignores_body_text() {
    // "Body" appears in every post body but no title
    let filtered = apply_filter("Body", &FailingSearch, &corpus()).await;
    assert!(filtered.is_empty());
}

#[test]
fn test_local_title_match_is_case_insensitive() {
    let matched = local_title_match("lEaRnInG", &corpus());
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, 1);
}

// ============================================================================
// Debouncer
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_lone_window_settles() {
    let debouncer = Debouncer::new(Duration::from_millis(300));
    assert_eq!(debouncer.settle().await, DebounceOutcome::Settled);
    assert!(DebounceOutcome::Settled.is_settled());
}

#[tokio::test(start_paused = true)]
async fn test_new_window_supersedes_pending_one() {
    let debouncer = Debouncer::new(Duration::from_millis(300));

    let early = tokio::spawn({
        let debouncer = debouncer.clone();
        async move { debouncer.settle().await }
    });

    // Let the first window open, then type again before it elapses
    tokio::time::sleep(Duration::from_millis(100)).await;
    let late = debouncer.settle().await;
    let early = early.await.unwrap();

    assert_eq!(early, DebounceOutcome::Superseded);
    assert_eq!(late, DebounceOutcome::Settled);
}

#[tokio::test(start_paused = true)]
async fn test_only_last_of_burst_settles() {
    let debouncer = Debouncer::new(Duration::from_millis(300));

    let mut handles = Vec::new();
    for _ in 0..4 {
        handles.push(tokio::spawn({
            let debouncer = debouncer.clone();
            async move { debouncer.settle().await }
        }));
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    let mut outcomes = Vec::new();
    for handle in handles {
        outcomes.push(handle.await.unwrap());
    }

    let settled = outcomes.iter().filter(|o| o.is_settled()).count();
    assert_eq!(settled, 1);
    assert_eq!(outcomes[3], DebounceOutcome::Settled);
}

#[tokio::test(start_paused = true)]
async fn test_separate_windows_both_settle() {
    let debouncer = Debouncer::new(Duration::from_millis(300));

    let first = debouncer.settle().await;
    tokio::time::sleep(Duration::from_millis(400)).await;
    let second = debouncer.settle().await;

    assert_eq!(first, DebounceOutcome::Settled);
    assert_eq!(second, DebounceOutcome::Settled);
}

#[test]
fn test_default_quiet_window() {
    let debouncer = Debouncer::default();
    assert_eq!(debouncer.quiet_window(), DEFAULT_QUIET_WINDOW);
    assert_eq!(DEFAULT_QUIET_WINDOW, Duration::from_millis(300));
}
