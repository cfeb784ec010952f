//! Blog API client
//!
//! Thin typed layer over [`HttpClient`] for the content endpoints. The
//! corpus fetch treats the server's `total` as authoritative: a one-item
//! probe learns the collection size, then a single request asks for
//! exactly that many posts.

use super::types::{Comment, CommentsEnvelope, Post, PostsEnvelope};
use crate::error::{Error, Result};
use crate::filter::SearchBackend;
use crate::http::{HttpClient, HttpClientConfig};
use async_trait::async_trait;
use tracing::debug;

/// Client for the remote content API
#[derive(Debug)]
pub struct BlogApi {
    http: HttpClient,
}

impl BlogApi {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = HttpClientConfig::builder().base_url(base_url).build();
        Self {
            http: HttpClient::with_config(config),
        }
    }

    /// Create a client over a pre-configured HTTP client
    pub fn with_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Authoritative size of the post collection
    ///
    /// Probes with `limit=1`; the envelope's `total` covers the whole
    /// collection.
    pub async fn total(&self) -> Result<usize> {
        let envelope: PostsEnvelope = self
            .http
            .get_json_with_query("/posts", &[("limit", "1".to_string())])
            .await?;
        Ok(envelope.total)
    }

    /// Fetch up to `limit` posts in server order
    pub async fn fetch_posts(&self, limit: usize) -> Result<Vec<Post>> {
        let envelope: PostsEnvelope = self
            .http
            .get_json_with_query("/posts", &[("limit", limit.to_string())])
            .await?;
        Ok(envelope.posts)
    }

    /// Fetch the full corpus
    ///
    /// Asks for the authoritative total first, then requests exactly that
    /// many posts. An empty collection short-circuits to no second request.
    pub async fn fetch_corpus(&self) -> Result<Vec<Post>> {
        let total = self.total().await?;
        debug!("Corpus contains {total} posts");

        if total == 0 {
            return Ok(Vec::new());
        }

        let posts = self.fetch_posts(total).await?;
        Ok(posts)
    }

    /// Server-side search over the collection
    ///
    /// Result order is the server's relevance order, taken verbatim.
    pub async fn search(&self, term: &str) -> Result<Vec<Post>> {
        let envelope: PostsEnvelope = self
            .http
            .get_json_with_query("/posts/search", &[("q", term.to_string())])
            .await?;
        Ok(envelope.posts)
    }

    /// Fetch a single post by id
    pub async fn fetch_post(&self, id: u64) -> Result<Post> {
        let result: Result<Post> = self.http.get_json(&format!("/posts/{id}")).await;
        match result {
            Err(Error::HttpStatus { status: 404, .. }) => Err(Error::PostNotFound { id }),
            other => other,
        }
    }

    /// Fetch the comments for a post
    pub async fn fetch_comments(&self, id: u64) -> Result<Vec<Comment>> {
        let envelope: CommentsEnvelope = self
            .http
            .get_json(&format!("/posts/{id}/comments"))
            .await?;
        Ok(envelope.comments)
    }
}

#[async_trait]
impl SearchBackend for BlogApi {
    async fn search(&self, term: &str) -> Result<Vec<Post>> {
        BlogApi::search(self, term).await
    }
}
