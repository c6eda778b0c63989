pub mod comment;
pub mod error;
pub mod post;
