//! Content API data model
//!
//! Wire types for the post and comment collections. Posts are immutable
//! once fetched and owned by the view for the lifetime of one page load.

use serde::{Deserialize, Serialize};

/// A single blog post as returned by the content API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique, stable identifier
    pub id: u64,
    /// Post title
    pub title: String,
    /// Full post body
    pub body: String,
    /// Opaque author reference
    #[serde(default)]
    pub user_id: u64,
    /// View count
    #[serde(default)]
    pub views: u64,
    /// Reaction counts
    #[serde(default)]
    pub reactions: Reactions,
    /// Ordered tag set, may be empty
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Excerpt of the body, truncated at `max_chars` with a trailing ellipsis.
    ///
    /// Truncation is on a char boundary, never mid-codepoint.
    pub fn excerpt(&self, max_chars: usize) -> String {
        truncate_chars(&self.body, max_chars)
    }

    /// Title truncated for card rendering
    pub fn short_title(&self, max_chars: usize) -> String {
        truncate_chars(&self.title, max_chars)
    }
}

/// Truncate to at most `max_chars` characters, appending "..." if shortened
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Reaction counts for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reactions {
    /// Number of likes
    #[serde(default)]
    pub likes: u64,
    /// Number of dislikes
    #[serde(default)]
    pub dislikes: u64,
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique identifier
    pub id: u64,
    /// Comment body
    pub body: String,
    /// Post the comment belongs to
    #[serde(default)]
    pub post_id: u64,
    /// Number of likes
    #[serde(default)]
    pub likes: u64,
    /// Comment author
    pub user: CommentUser,
}

/// The author of a comment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUser {
    /// Opaque user id
    #[serde(default)]
    pub id: u64,
    /// Handle shown as `@username`
    pub username: String,
    /// Display name
    #[serde(default)]
    pub full_name: String,
}

/// Response envelope for post collections
///
/// `total` is the server's authoritative count of the whole collection,
/// regardless of how many posts this response carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostsEnvelope {
    /// Posts in server order
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Authoritative collection size
    #[serde(default)]
    pub total: usize,
}

/// Response envelope for comment collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentsEnvelope {
    /// Comments in server order
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Authoritative collection size
    #[serde(default)]
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_deserialization() {
        let post: Post = serde_json::from_value(json!({
            "id": 1,
            "title": "His mother had always taught him",
            "body": "His mother had always taught him not to ever think of himself as better than others.",
            "tags": ["history", "american"],
            "reactions": {"likes": 192, "dislikes": 25},
            "views": 305,
            "userId": 121
        }))
        .unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.user_id, 121);
        assert_eq!(post.views, 305);
        assert_eq!(post.reactions.likes, 192);
        assert_eq!(post.reactions.dislikes, 25);
        assert_eq!(post.tags, vec!["history", "american"]);
    }

    #[test]
    fn test_post_missing_optional_fields() {
        let post: Post = serde_json::from_value(json!({
            "id": 7,
            "title": "Bare",
            "body": "Minimal post"
        }))
        .unwrap();

        assert_eq!(post.user_id, 0);
        assert_eq!(post.views, 0);
        assert_eq!(post.reactions, Reactions::default());
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_comment_deserialization() {
        let comment: Comment = serde_json::from_value(json!({
            "id": 1,
            "body": "This is some awesome thinking!",
            "postId": 242,
            "likes": 3,
            "user": {"id": 105, "username": "emmac", "fullName": "Emma Wilson"}
        }))
        .unwrap();

        assert_eq!(comment.post_id, 242);
        assert_eq!(comment.user.username, "emmac");
        assert_eq!(comment.user.full_name, "Emma Wilson");
    }

    #[test]
    fn test_excerpt_truncation() {
        let post = Post {
            id: 1,
            title: "A fairly long title that goes on and on".to_string(),
            body: "x".repeat(150),
            user_id: 0,
            views: 0,
            reactions: Reactions::default(),
            tags: vec![],
        };

        let excerpt = post.excerpt(100);
        assert_eq!(excerpt.chars().count(), 103); // 100 chars + "..."
        assert!(excerpt.ends_with("..."));

        let short = post.excerpt(200);
        assert_eq!(short, post.body);

        assert_eq!(post.short_title(10), "A fairly l...");
    }

    #[test]
    fn test_envelope_defaults() {
        let envelope: PostsEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.posts.is_empty());
        assert_eq!(envelope.total, 0);
    }
}
