use thiserror::Error;

use crate::domain::comment::CommentField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("post not found: {0}")]
    PostNotFound(String),
    #[error("invalid comment: {0} is empty")]
    InvalidComment(CommentField),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            DomainError::PostNotFound("999".into()).to_string(),
            "post not found: 999"
        );
        assert_eq!(
            DomainError::InvalidComment(CommentField::Name).to_string(),
            "invalid comment: name is empty"
        );
    }
}
