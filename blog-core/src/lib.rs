pub mod application;
pub mod copy;
pub mod data;
pub mod domain;

pub use application::comment_board::CommentBoard;
pub use application::post_view::PostView;
pub use data::catalog::Catalog;
pub use domain::comment::{Comment, CommentDraft, CommentField};
pub use domain::error::DomainError;
pub use domain::post::Post;
