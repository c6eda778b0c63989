use tracing::{debug, info};

use crate::domain::comment::{Comment, CommentDraft};
use crate::domain::error::DomainError;

/// Comment list and form draft owned by a single post view.
///
/// The list is append-only: `add_comment` is the only way it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBoard {
    comments: Vec<Comment>,
    draft: CommentDraft,
}

impl CommentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_draft_comment(&mut self, comment: impl Into<String>) {
        self.draft.comment = comment.into();
    }

    /// Commits the current draft.
    ///
    /// On success the trimmed comment is appended and the draft is cleared.
    /// On `InvalidComment` nothing changes, drafts included.
    pub fn add_comment(&mut self) -> Result<&Comment, DomainError> {
        let comment = match self.draft.to_comment() {
            Ok(comment) => comment,
            Err(e) => {
                debug!(error = %e, "comment ignored");
                return Err(e);
            }
        };

        info!(name = %comment.name, position = self.comments.len(), "comment added");
        self.comments.push(comment);
        self.draft.clear();

        Ok(&self.comments[self.comments.len() - 1])
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn draft(&self) -> &CommentDraft {
        &self.draft
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::CommentField;

    fn submit(board: &mut CommentBoard, name: &str, comment: &str) -> Result<Comment, DomainError> {
        board.set_draft_name(name);
        board.set_draft_comment(comment);
        board.add_comment().cloned()
    }

    #[test]
    fn starts_empty() {
        let board = CommentBoard::new();
        assert!(board.is_empty());
        assert_eq!(board.draft(), &CommentDraft::default());
    }

    #[test]
    fn add_appends_and_clears_draft() {
        let mut board = CommentBoard::new();
        let added = submit(&mut board, "Alice", "Great post!").unwrap();

        assert_eq!(
            added,
            Comment {
                name: "Alice".into(),
                comment: "Great post!".into()
            }
        );
        assert_eq!(board.comments(), [added]);
        assert_eq!(board.draft().name, "");
        assert_eq!(board.draft().comment, "");
    }

    #[test]
    fn invalid_add_keeps_draft_and_list() {
        let mut board = CommentBoard::new();
        let err = submit(&mut board, "Bob", "   ").unwrap_err();

        assert_eq!(err, DomainError::InvalidComment(CommentField::Comment));
        assert!(board.is_empty());
        assert_eq!(board.draft().name, "Bob");
        assert_eq!(board.draft().comment, "   ");
    }

    #[test]
    fn duplicates_are_kept() {
        let mut board = CommentBoard::new();
        submit(&mut board, "Alice", "same").unwrap();
        submit(&mut board, "Alice", "same").unwrap();
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn draft_edits_do_not_touch_the_list() {
        let mut board = CommentBoard::new();
        submit(&mut board, "Alice", "first").unwrap();
        board.set_draft_name("Carol");
        board.set_draft_comment("half-typed");
        assert_eq!(board.len(), 1);
        assert_eq!(board.comments()[0].name, "Alice");
    }
}
