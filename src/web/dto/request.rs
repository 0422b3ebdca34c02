//! Request DTOs for the Web API.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Create board request.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBoardRequest {
    /// Board title.
    #[validate(
        custom(function = not_blank),
        length(max = 200, message = "title must be at most 200 characters")
    )]
    pub title: String,
    /// Board content.
    #[validate(
        custom(function = not_blank),
        length(max = 10000, message = "content must be at most 10000 characters")
    )]
    pub content: String,
}

/// Update board request. Present fields replace the stored values.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBoardRequest {
    /// New title (optional).
    #[serde(default)]
    #[validate(
        custom(function = not_blank),
        length(max = 200, message = "title must be at most 200 characters")
    )]
    pub title: Option<String>,
    /// New content (optional).
    #[serde(default)]
    #[validate(
        custom(function = not_blank),
        length(max = 10000, message = "content must be at most 10000 characters")
    )]
    pub content: Option<String>,
}

impl UpdateBoardRequest {
    /// Check if the request carries no updatable fields.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_valid() {
        let req = CreateBoardRequest {
            title: "Hello".to_string(),
            content: "World".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_blank_title() {
        let req = CreateBoardRequest {
            title: "   ".to_string(),
            content: "World".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_create_request_title_too_long() {
        let req = CreateBoardRequest {
            title: "x".repeat(201),
            content: "World".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_create_request_content_too_long() {
        let req = CreateBoardRequest {
            title: "Hello".to_string(),
            content: "x".repeat(10_001),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn test_update_request_empty() {
        let req = UpdateBoardRequest {
            title: None,
            content: None,
        };
        assert!(req.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_request_validates_present_fields_only() {
        let req = UpdateBoardRequest {
            title: Some("Renamed".to_string()),
            content: None,
        };
        assert!(!req.is_empty());
        assert!(req.validate().is_ok());

        let req = UpdateBoardRequest {
            title: Some("".to_string()),
            content: None,
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }
}
