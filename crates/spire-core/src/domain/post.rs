use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a single blog article on the marketing site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    /// Publish date, ISO 8601 calendar date.
    pub date: NaiveDate,
    /// Cover image URL.
    pub image: String,
    /// Insertion-ordered; duplicates permitted.
    pub tags: Vec<String>,
    /// Estimated read time in minutes.
    pub read_time: u32,
}

/// A post payload before identity assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
    pub image: String,
    pub tags: Vec<String>,
    pub read_time: u32,
}

impl Post {
    /// Create a new post with a freshly assigned id.
    pub fn new(draft: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            author: draft.author,
            date: draft.date,
            image: draft.image,
            tags: draft.tags,
            read_time: draft.read_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewPost {
        NewPost {
            title: "Launching a brand".to_string(),
            excerpt: "Short version.".to_string(),
            content: "Long version.".to_string(),
            author: "Sarah Johnson".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            image: "https://example.com/cover.jpg".to_string(),
            tags: vec!["Branding".to_string(), "Strategy".to_string()],
            read_time: 8,
        }
    }

    #[test]
    fn test_new_preserves_every_field() {
        let post = Post::new(draft());
        let expected = draft();

        assert_eq!(post.title, expected.title);
        assert_eq!(post.excerpt, expected.excerpt);
        assert_eq!(post.content, expected.content);
        assert_eq!(post.author, expected.author);
        assert_eq!(post.date, expected.date);
        assert_eq!(post.image, expected.image);
        assert_eq!(post.tags, expected.tags);
        assert_eq!(post.read_time, expected.read_time);
    }

    #[test]
    fn test_new_assigns_distinct_ids() {
        let a = Post::new(draft());
        let b = Post::new(draft());
        assert_ne!(a.id, b.id);
    }
}
