//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// `target_url` is optional at the serde level so a missing field is
/// reported through validation with a readable message instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(required(message = "target_url is required"))]
    pub target_url: Option<String>,

    /// Optional explicit short code. Format is checked by the service.
    pub code: Option<String>,
}

/// JSON representation of a link.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            target_url: link.target_url,
            clicks: link.clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_target_url_fails_validation() {
        let request: CreateLinkRequest = serde_json::from_value(json!({ "code": "abc123" })).unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_request_with_target_url_passes_validation() {
        let request: CreateLinkRequest =
            serde_json::from_value(json!({ "target_url": "https://example.com" })).unwrap();

        assert!(request.validate().is_ok());
        assert!(request.code.is_none());
    }

    #[test]
    fn test_link_response_shape() {
        let created_at = DateTime::parse_from_rfc3339("2025-11-20T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let link = Link::new(
            7,
            "google".to_string(),
            "https://www.google.com".to_string(),
            0,
            None,
            created_at,
        );

        let value = serde_json::to_value(LinkResponse::from(link)).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["code"], "google");
        assert_eq!(value["target_url"], "https://www.google.com");
        assert_eq!(value["clicks"], 0);
        assert!(value["last_clicked"].is_null());
        assert_eq!(value["created_at"], "2025-11-20T10:00:00Z");
    }
}
