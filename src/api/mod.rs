//! Remote content API
//!
//! Typed client for the blog's post collection endpoints:
//!
//! - `GET /posts?limit=N` - paginated post listing with authoritative `total`
//! - `GET /posts/search?q=<term>` - server-side search
//! - `GET /posts/{id}` - single post
//! - `GET /posts/{id}/comments` - comments for a post

mod client;
mod types;

pub use client::BlogApi;
pub use types::{Comment, CommentUser, CommentsEnvelope, Post, PostsEnvelope, Reactions};
