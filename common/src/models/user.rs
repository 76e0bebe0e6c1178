//! User models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored user record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

/// Request body for creating a new user.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes_validation() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"name": "Ada", "email": "ada@example.com"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_bad_email_fails_validation() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"name": "Ada", "email": "not-an-email"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_name_fails_validation() {
        let req: CreateUserRequest =
            serde_json::from_str(r#"{"name": "", "email": "ada@example.com"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_field_is_a_parse_error() {
        assert!(serde_json::from_str::<CreateUserRequest>(r#"{"name": "Ada"}"#).is_err());
    }
}
