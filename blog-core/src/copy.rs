//! User-facing text shared by the web and terminal front ends.

pub const POST_NOT_FOUND: &str = "Post not found!";
pub const COMMENTS_HEADING: &str = "Comments";
pub const NO_COMMENTS: &str = "No comments yet. Be the first to comment!";
pub const NAME_PLACEHOLDER: &str = "Your name";
pub const COMMENT_PLACEHOLDER: &str = "Write a comment...";
pub const ADD_COMMENT: &str = "Add Comment";
pub const BACK_TO_HOME: &str = "Back to Home";
pub const HOME_HREF: &str = "/";

pub const IMAGE_WIDTH: u32 = 800;
pub const IMAGE_HEIGHT: u32 = 400;
