use std::fmt::Write;

use blog_core::copy::{BACK_TO_HOME, COMMENTS_HEADING, HOME_HREF, NO_COMMENTS, POST_NOT_FOUND};
use blog_core::{Comment, CommentBoard, Post, PostView};
use serde::Serialize;

#[derive(Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
enum ViewReport<'a> {
    Found {
        post: &'a Post,
        comments: &'a [Comment],
    },
    NotFound,
}

pub fn render_json(view: &PostView<'_>, board: &CommentBoard) -> serde_json::Result<String> {
    let report = match *view {
        PostView::Found(post) => ViewReport::Found {
            post,
            comments: board.comments(),
        },
        PostView::NotFound => ViewReport::NotFound,
    };
    serde_json::to_string_pretty(&report)
}

pub fn render_text(view: &PostView<'_>, board: &CommentBoard, site_url: Option<&str>) -> String {
    let post = match *view {
        PostView::Found(post) => post,
        PostView::NotFound => return format!("{POST_NOT_FOUND}\n"),
    };

    let mut out = String::new();
    let image_src = match site_url {
        Some(site) => format!("{}{}", site, post.image_url),
        None => post.image_url.to_string(),
    };

    let _ = writeln!(out, "# {}", post.title);
    let _ = writeln!(out, "[image: {}]({})", post.title, image_src);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", post.content);
    let _ = writeln!(out);
    let _ = writeln!(out, "## {COMMENTS_HEADING}");
    if board.is_empty() {
        let _ = writeln!(out, "{NO_COMMENTS}");
    } else {
        for item in board.comments() {
            let _ = writeln!(out, "- {}: {}", item.name, item.comment);
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{BACK_TO_HOME}: {HOME_HREF}");

    out
}
