//! User-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{UpdateUser, User};

/// Profile changes. Omitted fields stay as they are; an empty `avatar`
/// clears it.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 2048, message = "Avatar URL is too long"))]
    #[schema(example = "https://example.com/avatar.png")]
    pub avatar: Option<String>,
}

impl UpdateProfileRequest {
    pub fn into_update_user(self) -> UpdateUser {
        UpdateUser {
            name: self.name.map(|n| n.trim().to_string()),
            avatar: self
                .avatar
                .map(|a| Some(a.trim().to_string()).filter(|a| !a.is_empty())),
        }
    }
}

/// User data without the password hash.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    #[schema(format = DateTime)]
    pub created_at: String,
    #[schema(format = DateTime)]
    pub updated_at: String,
}

fn format_timestamp(value: jiff_diesel::DateTime) -> String {
    value
        .to_jiff()
        .strftime("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            created_at: format_timestamp(user.created_at),
            updated_at: format_timestamp(user.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_avatar_clears() {
        let update = UpdateProfileRequest {
            name: None,
            avatar: Some("  ".to_string()),
        }
        .into_update_user();
        assert_eq!(update.avatar, Some(None));
        assert!(update.name.is_none());
    }

    #[test]
    fn test_missing_fields_are_untouched() {
        let update = UpdateProfileRequest {
            name: Some(" Amina ".to_string()),
            avatar: None,
        }
        .into_update_user();
        assert_eq!(update.name.as_deref(), Some("Amina"));
        assert!(update.avatar.is_none());
    }
}
