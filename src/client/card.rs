use crate::models::Blog;

/// Body text shown on a card before it is cut off.
pub const EXCERPT_CHARS: usize = 100;

/// What a list item renders: title, image, category, and the truncated
/// body, with the id kept for the edit and delete affordances.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogCard {
    pub id: String,
    pub title: String,
    pub image: String,
    pub category: String,
    pub excerpt: String,
}

impl BlogCard {
    pub fn from_blog(blog: &Blog) -> Self {
        Self {
            id: blog.id.to_hex(),
            title: blog.title.clone(),
            image: blog.image.clone(),
            category: blog.category.clone(),
            excerpt: excerpt(&blog.post, EXCERPT_CHARS),
        }
    }
}

fn excerpt(post: &str, max_chars: usize) -> String {
    let mut chars = post.char_indices();
    match chars.nth(max_chars) {
        None => post.to_string(),
        Some((cut, _)) => format!("{}...", &post[..cut]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_bodies_are_kept_whole() {
        assert_eq!(excerpt("hello", 100), "hello");
        assert_eq!(excerpt("", 100), "");
    }

    #[test]
    fn long_bodies_are_cut_with_an_ellipsis() {
        let body = "x".repeat(150);
        let cut = excerpt(&body, 100);
        assert_eq!(cut.len(), 103);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(150);
        let cut = excerpt(&body, 100);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn exact_length_is_not_truncated() {
        let body = "x".repeat(100);
        assert_eq!(excerpt(&body, 100), body);
    }
}
