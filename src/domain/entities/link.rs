//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A short code bound to a target URL, plus click metadata.
///
/// `code`, `target_url` and `created_at` never change after creation.
/// `clicks` and `last_clicked` change only through a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        target_url: String,
        clicks: i64,
        last_clicked: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            target_url,
            clicks,
            last_clicked,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}

impl NewLink {
    pub fn new(code: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target_url: target_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc1234".to_string(),
            "https://example.com".to_string(),
            0,
            None,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "abc1234");
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.created_at, now);
        assert_eq!(link.clicks, 0);
        assert!(link.last_clicked.is_none());
    }

    #[test]
    fn test_link_equality_covers_click_metadata() {
        let now = Utc::now();
        let link = Link::new(
            2,
            "GITHUB".to_string(),
            "https://github.com".to_string(),
            0,
            None,
            now,
        );
        let mut clicked = link.clone();
        clicked.clicks = 1;
        clicked.last_clicked = Some(now);

        assert_ne!(link, clicked);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink::new("xyz7890", "https://rust-lang.org");

        assert_eq!(new_link.code, "xyz7890");
        assert_eq!(new_link.target_url, "https://rust-lang.org");
    }
}
