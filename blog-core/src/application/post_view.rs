use crate::data::catalog::Catalog;
use crate::domain::post::Post;

/// Render state of the post page.
///
/// `NotFound` covers both an absent route identifier and one that matches
/// nothing in the catalog; it carries no comment section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostView<'a> {
    Found(&'a Post),
    NotFound,
}

impl<'a> PostView<'a> {
    pub fn resolve(catalog: &Catalog<'a>, id: Option<&str>) -> Self {
        match id.and_then(|id| catalog.find(id)) {
            Some(post) => PostView::Found(post),
            None => PostView::NotFound,
        }
    }

    pub fn post(&self) -> Option<&'a Post> {
        match *self {
            PostView::Found(post) => Some(post),
            PostView::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PostView::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_id_resolves_to_found() {
        let catalog = Catalog::builtin();
        let view = PostView::resolve(&catalog, Some("2"));
        assert_eq!(view.post().map(|p| p.title), Some("Routing in Next.js"));
        assert!(view.is_found());
    }

    #[test]
    fn absent_id_is_not_found() {
        let catalog = Catalog::builtin();
        assert_eq!(PostView::resolve(&catalog, None), PostView::NotFound);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let catalog = Catalog::builtin();
        for id in ["", "999", "unknown", "1/"] {
            let view = PostView::resolve(&catalog, Some(id));
            assert!(!view.is_found(), "{id:?} should not resolve");
            assert!(view.post().is_none());
        }
    }
}
