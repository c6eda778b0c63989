use blog_core::{Catalog, CommentBoard, PostView};
use proptest::prelude::*;

fn blank() -> impl Strategy<Value = String> {
    "[ \t\r\n]{0,8}"
}

fn filled() -> impl Strategy<Value = String> {
    "[ ]{0,3}[a-zA-Z0-9!?.]{1,16}[ ]{0,3}"
}

proptest! {
    #[test]
    fn ids_outside_catalog_never_resolve(id in "\\PC{0,12}") {
        let catalog = Catalog::builtin();
        prop_assume!(catalog.posts().iter().all(|p| p.id != id));
        prop_assert_eq!(PostView::resolve(&catalog, Some(id.as_str())), PostView::NotFound);
    }

    #[test]
    fn blank_name_never_grows_the_list(name in blank(), comment in filled()) {
        let mut board = CommentBoard::new();
        board.set_draft_name(name);
        board.set_draft_comment(comment);
        prop_assert!(board.add_comment().is_err());
        prop_assert!(board.is_empty());
    }

    #[test]
    fn blank_comment_never_grows_the_list(name in filled(), comment in blank()) {
        let mut board = CommentBoard::new();
        board.set_draft_name(name);
        board.set_draft_comment(comment);
        prop_assert!(board.add_comment().is_err());
        prop_assert!(board.is_empty());
    }

    #[test]
    fn valid_adds_append_trimmed_in_order(
        entries in prop::collection::vec((filled(), filled()), 0..12)
    ) {
        let mut board = CommentBoard::new();
        for (name, comment) in &entries {
            board.set_draft_name(name.as_str());
            board.set_draft_comment(comment.as_str());
            prop_assert!(board.add_comment().is_ok());
        }

        prop_assert_eq!(board.len(), entries.len());
        for (stored, (name, comment)) in board.comments().iter().zip(&entries) {
            prop_assert_eq!(stored.name.as_str(), name.trim());
            prop_assert_eq!(stored.comment.as_str(), comment.trim());
        }
    }
}
