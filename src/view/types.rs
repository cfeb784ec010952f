//! View models
//!
//! Typed state handed across the rendering boundary. The renderer only
//! ever consumes these; nothing is read back out of rendered output.

use crate::api::{Comment, Post};
use crate::error::{Error, Result};
use crate::paginate::PageControl;
use crate::types::DisplayState;
use url::Url;

/// Everything the rendering surface needs for one list render cycle
#[derive(Debug, Clone)]
pub struct RenderModel {
    /// Which display state is active
    pub display: DisplayState,
    /// The item slice for the current page
    pub items: Vec<Post>,
    /// Pagination control layout; `None` renders no control at all
    pub control: Option<PageControl>,
    /// The active search term (may be empty)
    pub term: String,
    /// Clamped current page
    pub current_page: usize,
    /// Total pages in the filtered view
    pub total_pages: usize,
}

/// The detail view model: one post plus its comments
#[derive(Debug, Clone)]
pub struct PostDetail {
    /// The post
    pub post: Post,
    /// Comments in server order, may be empty
    pub comments: Vec<Comment>,
}

/// Build the detail link for a post
///
/// The id travels as a query parameter, the way the detail page finds it.
pub fn post_link(id: u64) -> String {
    format!("post.html?id={id}")
}

/// Parse the post id back out of a detail link
///
/// Accepts absolute and page-relative links.
pub fn post_id_from_link(link: &str) -> Result<u64> {
    let url = match Url::parse(link) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse("http://localhost/")?.join(link)?
        }
        Err(e) => return Err(e.into()),
    };

    url.query_pairs()
        .find(|(key, _)| key == "id")
        .and_then(|(_, value)| value.parse().ok())
        .ok_or_else(|| Error::MalformedLink {
            link: link.to_string(),
        })
}
