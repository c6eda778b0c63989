use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub name: String,
    pub comment: String,
}

/// The in-progress, uncommitted form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub name: String,
    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CommentField {
    #[display("name")]
    Name,
    #[display("comment")]
    Comment,
}

impl CommentDraft {
    /// Builds the comment this draft would commit, trimming both fields.
    ///
    /// Does not clear the draft; that is the board's job once the
    /// comment is actually appended.
    pub fn to_comment(&self) -> Result<Comment, DomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidComment(CommentField::Name));
        }
        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(DomainError::InvalidComment(CommentField::Comment));
        }

        Ok(Comment {
            name: name.to_string(),
            comment: comment.to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.comment.clear();
    }
}
