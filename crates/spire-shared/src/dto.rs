//! Data Transfer Objects - payloads the admin forms produce.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use spire_core::DomainError;
use spire_core::domain::NewPost;

/// Request to sign in to the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The admin-panel post form, as raw field values.
///
/// Tags arrive as a single comma-separated string; splitting, trimming, and
/// dropping empty fragments happens on conversion, order preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub image: String,
    pub tags: String,
    pub read_time: u32,
}

impl PostDraft {
    /// Field well-formedness the content store itself does not re-check.
    pub fn validate(&self) -> Result<(), DomainError> {
        fn required(value: &str, name: &str) -> Result<(), DomainError> {
            if value.trim().is_empty() {
                return Err(DomainError::Validation(format!("{name} must not be empty")));
            }
            Ok(())
        }

        required(&self.title, "title")?;
        required(&self.excerpt, "excerpt")?;
        required(&self.content, "content")?;
        required(&self.author, "author")?;
        required(&self.image, "image")?;

        if self.read_time == 0 {
            return Err(DomainError::Validation(
                "read time must be at least one minute".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate the draft and convert it into a store-ready payload,
    /// stamping today's UTC calendar date as the publish date.
    pub fn into_new_post(self) -> Result<NewPost, DomainError> {
        self.validate()?;

        Ok(NewPost {
            tags: parse_tags(&self.tags),
            date: Utc::now().date_naive(),
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            author: self.author,
            image: self.image,
            read_time: self.read_time,
        })
    }
}

/// Split a comma-separated tag string, trimming whitespace and discarding
/// empty fragments, order preserved. Duplicates are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "A title".to_string(),
            excerpt: "An excerpt".to_string(),
            content: "Some body".to_string(),
            author: "Michael Chen".to_string(),
            image: "https://example.com/cover.jpg".to_string(),
            tags: "SEO, Content Marketing".to_string(),
            read_time: 5,
        }
    }

    #[test]
    fn test_parse_tags_trims_and_drops_empties() {
        assert_eq!(
            parse_tags("  SEO , Content Marketing ,, Branding,"),
            vec!["SEO", "Content Marketing", "Branding"]
        );
    }

    #[test]
    fn test_parse_tags_keeps_duplicates_and_order() {
        assert_eq!(parse_tags("a,b,a"), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_parse_tags_of_blank_input_is_empty() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("  , ,").is_empty());
    }

    #[test]
    fn test_into_new_post_carries_fields_and_stamps_today() {
        let new_post = draft().into_new_post().unwrap();

        assert_eq!(new_post.title, "A title");
        assert_eq!(new_post.tags, vec!["SEO", "Content Marketing"]);
        assert_eq!(new_post.date, Utc::now().date_naive());
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut bad = draft();
        bad.title = "   ".to_string();
        assert!(matches!(
            bad.validate(),
            Err(DomainError::Validation(msg)) if msg.contains("title")
        ));
    }

    #[test]
    fn test_zero_read_time_is_rejected() {
        let mut bad = draft();
        bad.read_time = 0;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }
}
