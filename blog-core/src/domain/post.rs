use derive_more::Display;
use serde::Serialize;

/// A read-only catalog entry.
///
/// Posts only ever live in the static catalog, so the fields borrow
/// `'static` text instead of owning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("Post {{ id: {}, title: {} }}", id, title)]
pub struct Post {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub image_url: &'static str,
}

impl Post {
    pub const fn new(
        id: &'static str,
        title: &'static str,
        content: &'static str,
        image_url: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            content,
            image_url,
        }
    }

    /// First `max_chars` characters of the content, with `...` appended when cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Post = Post::new("7", "Sample", "héllo world", "/images/sample.webp");

    #[test]
    fn excerpt_cuts_on_char_boundary() {
        assert_eq!(SAMPLE.excerpt(2), "hé...");
    }

    #[test]
    fn excerpt_keeps_short_content_intact() {
        assert_eq!(SAMPLE.excerpt(64), "héllo world");
        assert_eq!(SAMPLE.excerpt(11), "héllo world");
    }

    #[test]
    fn serializes_image_url_in_camel_case() {
        let json = serde_json::to_value(SAMPLE).unwrap();
        assert_eq!(json["imageUrl"], "/images/sample.webp");
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn display_is_a_summary_line() {
        assert_eq!(SAMPLE.to_string(), "Post { id: 7, title: Sample }");
    }
}
