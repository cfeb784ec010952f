//! Terminal rendering surface
//!
//! Consumes the typed view models and produces text. State flows one way:
//! nothing is ever read back out of the rendered output.

use crate::paginate::PageControl;
use crate::types::DisplayState;
use crate::view::{post_link, PostDetail, RenderModel};
use std::fmt::Write;

/// Title length for list cards
const TITLE_CHARS: usize = 50;

/// Body excerpt length for list cards
const EXCERPT_CHARS: usize = 100;

/// Render the list view
pub fn render_list(model: &RenderModel) -> String {
    match &model.display {
        DisplayState::Loading => "Loading posts...\n".to_string(),
        DisplayState::Failed { message } => format!("{message}\n"),
        DisplayState::NoResults => {
            if model.term.is_empty() {
                "No posts found.\n".to_string()
            } else {
                format!("No posts found for \"{}\".\n", model.term)
            }
        }
        DisplayState::Ready => {
            let mut out = String::new();

            if model.term.is_empty() {
                let _ = writeln!(out, "Page {} of {}", model.current_page, model.total_pages);
            } else {
                let _ = writeln!(
                    out,
                    "Page {} of {} for \"{}\"",
                    model.current_page, model.total_pages, model.term
                );
            }
            out.push('\n');

            for post in &model.items {
                let _ = writeln!(out, "#{} {}", post.id, post.short_title(TITLE_CHARS));
                let _ = writeln!(out, "   {}", post.excerpt(EXCERPT_CHARS));
                let _ = writeln!(
                    out,
                    "   user #{} · {} views · {} likes",
                    post.user_id, post.views, post.reactions.likes
                );
                if !post.tags.is_empty() {
                    let tags: Vec<String> =
                        post.tags.iter().map(|t| format!("#{t}")).collect();
                    let _ = writeln!(out, "   {}", tags.join(" "));
                }
                let _ = writeln!(out, "   {}", post_link(post.id));
                out.push('\n');
            }

            if let Some(control) = &model.control {
                let _ = writeln!(out, "{}", control_line(control));
            }

            out
        }
    }
}

/// Render the pagination control as one line
///
/// Disabled arrows stay visible; the current page sits in brackets and
/// ellipsis markers stand in for skipped ranges.
pub fn control_line(control: &PageControl) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(if control.prev_enabled { "‹" } else { "·" }.to_string());

    if control.show_first() {
        parts.push("1".to_string());
    }
    if control.window.leading_ellipsis {
        parts.push("…".to_string());
    }

    for page in control.pages() {
        if page == control.current {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }

    if control.window.trailing_ellipsis {
        parts.push("…".to_string());
    }
    if control.show_last() {
        parts.push(control.total_pages.to_string());
    }

    parts.push(if control.next_enabled { "›" } else { "·" }.to_string());

    parts.join(" ")
}

/// Render the detail view
pub fn render_detail(detail: &PostDetail) -> String {
    let mut out = String::new();
    let post = &detail.post;

    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(
        out,
        "user #{} · {} views · {} likes · {} dislikes",
        post.user_id, post.views, post.reactions.likes, post.reactions.dislikes
    );
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{t}")).collect();
        let _ = writeln!(out, "{}", tags.join(" "));
    }
    out.push('\n');
    let _ = writeln!(out, "{}", post.body);

    if !detail.comments.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Comments ({})", detail.comments.len());
        for comment in &detail.comments {
            let _ = writeln!(
                out,
                "- {} (@{}, {} likes)",
                comment.user.full_name, comment.user.username, comment.likes
            );
            let _ = writeln!(out, "  {}", comment.body);
        }
    }

    out
}
