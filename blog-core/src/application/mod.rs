pub mod comment_board;
pub mod post_view;
